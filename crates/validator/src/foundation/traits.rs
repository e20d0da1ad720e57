//! Core traits for the validation system
//!
//! This module defines the [`Validate`] trait every validator implements and
//! the [`ValidateExt`] extension trait that provides the fluent combinator API
//! and the boundary helpers used by calling programs.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::foundation::{Error, Result};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is a pure predicate over a possibly-absent JSON value.
/// `None` stands for an absent value (a missing object field), which is
/// distinct from `Some(&Value::Null)`. Only [`Optional`] and [`Anything`]
/// accept an absent value; every other built-in validator rejects it.
///
/// Validators must be free of observable side effects: the same input always
/// yields the same answer. The `Send + Sync` supertraits let a schema be
/// shared across threads without coordination.
///
/// # Examples
///
/// ```
/// use conform_validator::foundation::Validate;
/// use serde_json::{Value, json};
///
/// struct NonEmptyString;
///
/// impl Validate for NonEmptyString {
///     fn validate(&self, input: Option<&Value>) -> bool {
///         input
///             .and_then(Value::as_str)
///             .is_some_and(|s| !s.is_empty())
///     }
/// }
///
/// assert!(NonEmptyString.validate(Some(&json!("x"))));
/// assert!(!NonEmptyString.validate(Some(&json!(""))));
/// assert!(!NonEmptyString.validate(None));
/// ```
///
/// [`Anything`]: crate::validators::Anything
pub trait Validate: Send + Sync {
    /// Returns `true` if `input` conforms.
    fn validate(&self, input: Option<&Value>) -> bool;
}

impl<V: Validate + ?Sized> Validate for &V {
    #[inline]
    fn validate(&self, input: Option<&Value>) -> bool {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    #[inline]
    fn validate(&self, input: Option<&Value>) -> bool {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    #[inline]
    fn validate(&self, input: Option<&Value>) -> bool {
        (**self).validate(input)
    }
}

/// A type-erased validator, used where schemas mix validator types.
pub type BoxValidator = Box<dyn Validate>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods and boundary helpers.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use conform_validator::prelude::*;
/// use serde_json::json;
///
/// let percent = gte(0).and(lte(100));
/// assert!(percent.is_valid(&json!(42)));
/// assert!(!percent.is_valid(&json!(101)));
///
/// let id = string().or(number());
/// assert!(id.is_valid(&json!("a1")));
/// assert!(!id.is_valid(&json!(true)));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// `other` is not evaluated when `self` rejects.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// `other` is not evaluated when `self` accepts.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate,
    {
        Or::new(self, other)
    }

    /// Lets an absent value pass; anything present is delegated to `self`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Erases the validator type so it can live in a heterogeneous schema.
    fn boxed(self) -> BoxValidator
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Validates a value that is known to be present.
    #[inline]
    fn is_valid(&self, value: &Value) -> bool {
        self.validate(Some(value))
    }

    /// Like [`is_valid`](Self::is_valid), but returns [`Error::Rejected`] on
    /// mismatch so callers can use `?`.
    fn ensure(&self, value: &Value) -> Result<()> {
        if self.is_valid(value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(kind = crate::foundation::kind_of(value), "value accepted");
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = crate::foundation::kind_of(value), "value rejected");
            Err(Error::Rejected)
        }
    }

    /// Parses JSON text and validates the result.
    ///
    /// Malformed text is an error; a well-formed but non-conforming document
    /// is `Ok(false)`.
    fn check_str(&self, text: &str) -> Result<bool> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %e, "input is not JSON");
            Error::Json(e)
        })?;
        Ok(self.is_valid(&value))
    }

    /// Validates `value`, then deserializes it into the statically typed
    /// shape the schema describes.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform_validator::prelude::*;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Point { x: f64, y: f64 }
    ///
    /// let schema = object! { "x" => number(), "y" => number() };
    /// let p: Point = schema.decode(json!({ "x": 1, "y": 2.5 })).unwrap();
    /// assert_eq!(p.y, 2.5);
    /// assert!(schema.decode::<Point>(json!({ "x": 1 })).is_err());
    /// ```
    fn decode<T>(&self, value: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.ensure(&value)?;
        serde_json::from_value(value).map_err(Error::Decode)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate(&self, _input: Option<&Value>) -> bool {
            true
        }
    }

    struct PresentOnly;

    impl Validate for PresentOnly {
        fn validate(&self, input: Option<&Value>) -> bool {
            input.is_some()
        }
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let v = PresentOnly;
        assert!((&v).validate(Some(&json!(1))));
        assert!(!Box::new(PresentOnly).validate(None));
        assert!(Arc::new(PresentOnly).validate(Some(&Value::Null)));

        let erased: BoxValidator = PresentOnly.boxed();
        assert!(!erased.validate(None));
    }

    #[test]
    fn test_is_valid_passes_present_value() {
        assert!(PresentOnly.is_valid(&Value::Null));
    }

    #[test]
    fn test_ensure() {
        assert!(AlwaysValid.ensure(&json!({})).is_ok());
        let never = PresentOnly.and(NeverValid);
        assert!(matches!(never.ensure(&json!(null)), Err(Error::Rejected)));
    }

    struct NeverValid;

    impl Validate for NeverValid {
        fn validate(&self, _input: Option<&Value>) -> bool {
            false
        }
    }

    #[test]
    fn test_check_str_reports_malformed_json() {
        assert!(AlwaysValid.check_str("[1, 2]").unwrap());
        let err = AlwaysValid.check_str("{ nope").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
