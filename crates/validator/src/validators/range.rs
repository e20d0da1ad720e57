//! Numeric comparison validators
//!
//! Each comparator first requires a JSON number, then compares it as `f64`
//! against its bound. Anything that is not a number fails, whatever the
//! bound.

crate::validator! {
    /// Accepts numbers strictly greater than `bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform_validator::validators::gt;
    /// use conform_validator::foundation::ValidateExt;
    /// use serde_json::json;
    ///
    /// let v = gt(5);
    /// assert!(v.is_valid(&json!(6)));
    /// assert!(!v.is_valid(&json!(5))); // Not strictly greater
    /// assert!(!v.is_valid(&json!("6")));
    /// ```
    #[derive(Copy, PartialEq)]
    pub Gt { bound: f64 };
    rule(self, value) { value.as_f64().is_some_and(|n| n > self.bound) }
    new(bound: impl Into<f64>) { Self { bound: bound.into() } }
    fn gt(bound: impl Into<f64>);
}

crate::validator! {
    /// Accepts numbers greater than or equal to `bound`.
    #[derive(Copy, PartialEq)]
    pub Gte { bound: f64 };
    rule(self, value) { value.as_f64().is_some_and(|n| n >= self.bound) }
    new(bound: impl Into<f64>) { Self { bound: bound.into() } }
    fn gte(bound: impl Into<f64>);
}

crate::validator! {
    /// Accepts numbers strictly less than `bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform_validator::validators::lt;
    /// use conform_validator::foundation::ValidateExt;
    /// use serde_json::json;
    ///
    /// let v = lt(10);
    /// assert!(v.is_valid(&json!(9.99)));
    /// assert!(!v.is_valid(&json!(10))); // Not strictly less
    /// ```
    #[derive(Copy, PartialEq)]
    pub Lt { bound: f64 };
    rule(self, value) { value.as_f64().is_some_and(|n| n < self.bound) }
    new(bound: impl Into<f64>) { Self { bound: bound.into() } }
    fn lt(bound: impl Into<f64>);
}

crate::validator! {
    /// Accepts numbers less than or equal to `bound`.
    #[derive(Copy, PartialEq)]
    pub Lte { bound: f64 };
    rule(self, value) { value.as_f64().is_some_and(|n| n <= self.bound) }
    new(bound: impl Into<f64>) { Self { bound: bound.into() } }
    fn lte(bound: impl Into<f64>);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::{Value, json};

    fn check(v: &impl Validate, value: Value) -> bool {
        v.validate(Some(&value))
    }

    #[test]
    fn test_gt() {
        let v = gt(5);
        assert!(check(&v, json!(6)));
        assert!(check(&v, json!(5.0001)));
        assert!(!check(&v, json!(5)));
        assert!(!check(&v, json!(4)));
    }

    #[test]
    fn test_gte() {
        let v = gte(5);
        assert!(check(&v, json!(5)));
        assert!(check(&v, json!(5.0)));
        assert!(!check(&v, json!(4.999)));
    }

    #[test]
    fn test_lt() {
        let v = lt(0);
        assert!(check(&v, json!(-1)));
        assert!(!check(&v, json!(0)));
        assert!(!check(&v, json!(1)));
    }

    #[test]
    fn test_lte() {
        let v = lte(10.5);
        assert!(check(&v, json!(10.5)));
        assert!(check(&v, json!(-100)));
        assert!(!check(&v, json!(11)));
    }

    #[test]
    fn test_non_numbers_always_fail() {
        for value in [json!("1"), json!(true), json!(null), json!([1]), json!({ "n": 1 })] {
            assert!(!check(&gt(-1e300), value.clone()));
            assert!(!check(&gte(-1e300), value.clone()));
            assert!(!check(&lt(1e300), value.clone()));
            assert!(!check(&lte(1e300), value));
        }
        assert!(!gte(0).validate(None));
    }

    #[test]
    fn test_large_integers_compare_as_f64() {
        let v = gt(u32::MAX);
        assert!(check(&v, json!(u64::MAX)));
        assert!(check(&lt(0), json!(i64::MIN)));
    }

    #[test]
    fn test_nan_bound_rejects_everything() {
        assert!(!check(&gt(f64::NAN), json!(1)));
        assert!(!check(&lte(f64::NAN), json!(1)));
    }
}
