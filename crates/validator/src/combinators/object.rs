//! OBJECT combinator - validates a fixed-shape record
//!
//! An [`Object`] schema maps field names to validators. A value conforms when
//! it is a JSON object and every declared field passes its validator. Fields
//! the schema does not mention are ignored, so schemas are open to extension.
//!
//! # Examples
//!
//! ```
//! use conform_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Object::new()
//!     .field("a", number())
//!     .field("b", optional(string()));
//!
//! assert!(schema.is_valid(&json!({ "a": 1 })));
//! assert!(schema.is_valid(&json!({ "a": 1, "b": "x" })));
//! assert!(schema.is_valid(&json!({ "a": 1, "extra": true })));
//! assert!(!schema.is_valid(&json!({ "b": "x" })));   // missing required `a`
//! assert!(!schema.is_valid(&json!({ "a": 1, "b": 2 })));
//! assert!(!schema.is_valid(&json!([])));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{BoxValidator, Validate};

/// A record schema: one validator per declared field name.
///
/// Fields are checked in declaration order and checking stops at the first
/// field that fails. A field missing from the value is handed to its
/// validator as absent (`None`), so it fails unless that validator is
/// [`optional`](crate::combinators::optional).
///
/// Declaring the same name twice keeps the field's first position and
/// replaces its validator.
#[derive(Default)]
pub struct Object {
    fields: IndexMap<String, BoxValidator>,
}

impl Object {
    /// Creates a schema with no fields; it accepts any JSON object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.fields.insert(name.into(), Box::new(validator));
        self
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names, in checking order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the validator declared for `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Validate> {
        self.fields.get(name).map(|validator| &**validator)
    }
}

impl Validate for Object {
    fn validate(&self, input: Option<&Value>) -> bool {
        let Some(Value::Object(record)) = input else {
            return false;
        };
        self.fields
            .iter()
            .all(|(name, validator)| validator.validate(record.get(name)))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> FromIterator<(K, BoxValidator)> for Object
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, BoxValidator)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, validator)| (name.into(), validator))
                .collect(),
        }
    }
}

/// Creates an [`Object`] schema from `(name, validator)` pairs.
///
/// # Examples
///
/// ```
/// use conform_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = object([
///     ("id", number().boxed()),
///     ("name", string().boxed()),
/// ]);
/// assert!(schema.is_valid(&json!({ "id": 1, "name": "n" })));
/// ```
pub fn object<I, K>(schema: I) -> Object
where
    I: IntoIterator<Item = (K, BoxValidator)>,
    K: Into<String>,
{
    schema.into_iter().collect()
}
