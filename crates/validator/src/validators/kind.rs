//! Scalar kind validators
//!
//! These check only the runtime kind of a value. Nothing is coerced: the
//! string `"5"` is not a number and `0` is not a boolean.

use serde_json::Value;

use crate::foundation::Validate;

crate::validator! {
    /// Accepts any JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform_validator::validators::string;
    /// use conform_validator::foundation::ValidateExt;
    /// use serde_json::json;
    ///
    /// assert!(string().is_valid(&json!("")));
    /// assert!(!string().is_valid(&json!(5)));
    /// ```
    pub IsString;
    rule(value) { value.is_string() }
    fn string();
}

crate::validator! {
    /// Accepts any JSON number, integer or floating point.
    pub IsNumber;
    rule(value) { value.is_number() }
    fn number();
}

crate::validator! {
    /// Accepts `true` and `false`.
    pub IsBoolean;
    rule(value) { value.is_boolean() }
    fn boolean();
}

/// Accepts everything, including an absent value.
///
/// The deliberate escape hatch for parts of a document whose shape is not
/// constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anything;

impl Validate for Anything {
    fn validate(&self, _input: Option<&Value>) -> bool {
        true
    }
}

/// Creates an [`Anything`] validator.
#[must_use]
pub const fn any() -> Anything {
    Anything
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("text"), true, false, false)]
    #[case(json!(""), true, false, false)]
    #[case(json!(0), false, true, false)]
    #[case(json!(-2.5), false, true, false)]
    #[case(json!(true), false, false, true)]
    #[case(json!("5"), true, false, false)]
    #[case(json!(null), false, false, false)]
    #[case(json!([1]), false, false, false)]
    #[case(json!({}), false, false, false)]
    fn test_kinds(
        #[case] value: Value,
        #[case] is_string: bool,
        #[case] is_number: bool,
        #[case] is_boolean: bool,
    ) {
        assert_eq!(string().validate(Some(&value)), is_string);
        assert_eq!(number().validate(Some(&value)), is_number);
        assert_eq!(boolean().validate(Some(&value)), is_boolean);
        assert!(any().validate(Some(&value)));
    }

    #[test]
    fn test_absent() {
        assert!(!string().validate(None));
        assert!(!number().validate(None));
        assert!(!boolean().validate(None));
        assert!(any().validate(None));
    }
}
