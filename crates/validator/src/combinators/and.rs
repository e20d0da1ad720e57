//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.
//!
//! # Examples
//!
//! ```
//! use conform_validator::combinators::And;
//! use conform_validator::foundation::ValidateExt;
//! use conform_validator::validators::{gte, lte};
//! use serde_json::json;
//!
//! let validator = And::new(gte(0), lte(10));
//! assert!(validator.is_valid(&json!(5)));
//! assert!(!validator.is_valid(&json!(-1))); // fails gte
//! ```

use serde_json::Value;

use crate::foundation::Validate;

/// Combines two validators with logical AND.
///
/// The right validator is only evaluated when the left one accepts.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to apply
    /// * `right` - The second validator to apply
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: Option<&Value>) -> bool {
        self.left.validate(input) && self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```
/// use conform_validator::combinators::{and, array};
/// use conform_validator::foundation::ValidateExt;
/// use conform_validator::validators::{max_len, number};
/// use serde_json::json;
///
/// let pair = and(array(number()), max_len(2));
/// assert!(pair.is_valid(&json!([1, 2])));
/// assert!(!pair.is_valid(&json!([1, 2, 3])));
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}
