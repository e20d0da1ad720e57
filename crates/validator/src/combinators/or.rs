//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the combined
//! validator to succeed. The two sides may expect entirely different kinds of
//! value, which is how unions such as "string or number" are declared.
//!
//! # Examples
//!
//! ```
//! use conform_validator::combinators::Or;
//! use conform_validator::foundation::ValidateExt;
//! use conform_validator::validators::{number, string};
//! use serde_json::json;
//!
//! let validator = Or::new(string(), number());
//! assert!(validator.is_valid(&json!("id-7")));
//! assert!(validator.is_valid(&json!(7)));
//! assert!(!validator.is_valid(&json!(true)));
//! ```

use serde_json::Value;

use crate::foundation::Validate;

/// Combines two validators with logical OR.
///
/// If the left validator passes, the right one is not evaluated.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to try
    /// * `right` - The second validator to try if the first fails
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: Option<&Value>) -> bool {
        self.left.validate(input) || self.right.validate(input)
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{boolean, equal, number, string};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting<'a> {
        answer: bool,
        calls: &'a AtomicUsize,
    }

    impl Validate for Counting<'_> {
        fn validate(&self, _input: Option<&Value>) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.answer
        }
    }

    #[test]
    fn test_or_left_passes() {
        assert!(or(string(), number()).is_valid(&json!("a")));
    }

    #[test]
    fn test_or_right_passes() {
        assert!(or(string(), number()).is_valid(&json!(5)));
    }

    #[test]
    fn test_or_both_fail() {
        let validator = or(string(), number());
        assert!(!validator.is_valid(&json!(true)));
        assert!(!validator.is_valid(&json!(null)));
        assert!(!validator.validate(None));
    }

    #[test]
    fn test_or_short_circuits() {
        let calls = AtomicUsize::new(0);
        let right = Counting { answer: false, calls: &calls };
        let validator = or(number(), right);

        assert!(validator.is_valid(&json!(1)));
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        assert!(!validator.is_valid(&json!("1")));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_or_chain() {
        let validator = equal("a").or(equal("b")).or(boolean());
        assert!(validator.is_valid(&json!("b")));
        assert!(validator.is_valid(&json!(false)));
        assert!(!validator.is_valid(&json!("c")));
        assert!(validator.left().left().validate(Some(&json!("a"))));
    }
}
