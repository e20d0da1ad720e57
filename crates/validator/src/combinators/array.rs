//! ARRAY combinator - validates each element of a JSON array

use serde_json::Value;

use crate::foundation::Validate;

// ============================================================================
// ARRAY COMBINATOR
// ============================================================================

/// Validates each element of a JSON array.
///
/// The input must be an array; anything else is rejected before any element
/// is looked at. An empty array passes. Evaluation stops at the first element
/// the inner validator rejects.
///
/// # Examples
///
/// ```
/// use conform_validator::combinators::array;
/// use conform_validator::foundation::ValidateExt;
/// use conform_validator::validators::number;
/// use serde_json::json;
///
/// let numbers = array(number());
/// assert!(numbers.is_valid(&json!([])));
/// assert!(numbers.is_valid(&json!([1, 2, 3])));
/// assert!(!numbers.is_valid(&json!([1, "2"])));
/// assert!(!numbers.is_valid(&json!("not an array")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array<V> {
    inner: V,
}

impl<V> Array<V> {
    /// Creates a new ARRAY combinator around an element validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the element validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the element validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Array<V>
where
    V: Validate,
{
    fn validate(&self, input: Option<&Value>) -> bool {
        match input {
            Some(Value::Array(items)) => items.iter().all(|item| self.inner.validate(Some(item))),
            _ => false,
        }
    }
}

/// Creates an [`Array`] combinator.
pub fn array<V>(validator: V) -> Array<V> {
    Array::new(validator)
}
