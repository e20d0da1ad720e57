//! OBJECT MAP OF combinator - validates every value of a JSON object

use serde_json::Value;

use crate::foundation::Validate;

/// Validates a JSON object used as a dictionary.
///
/// Any key set is allowed and keys are not checked; every value must pass the
/// inner validator. Non-objects (arrays and `null` included) are rejected
/// before any value is looked at.
///
/// # Examples
///
/// ```
/// use conform_validator::combinators::object_map_of;
/// use conform_validator::foundation::ValidateExt;
/// use conform_validator::validators::number;
/// use serde_json::json;
///
/// let scores = object_map_of(number());
/// assert!(scores.is_valid(&json!({ "ada": 3, "alan": 5 })));
/// assert!(scores.is_valid(&json!({})));
/// assert!(!scores.is_valid(&json!({ "ada": "3" })));
/// assert!(!scores.is_valid(&json!([3, 5])));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectMapOf<V> {
    inner: V,
}

impl<V> ObjectMapOf<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for ObjectMapOf<V>
where
    V: Validate,
{
    fn validate(&self, input: Option<&Value>) -> bool {
        match input {
            Some(Value::Object(map)) => map.values().all(|value| self.inner.validate(Some(value))),
            _ => false,
        }
    }
}

/// Creates an [`ObjectMapOf`] combinator.
pub fn object_map_of<V>(validator: V) -> ObjectMapOf<V> {
    ObjectMapOf::new(validator)
}
