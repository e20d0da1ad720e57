//! OPTIONAL combinator - lets an absent value through

use serde_json::Value;

use crate::foundation::Validate;

/// Accepts an absent value; delegates everything else to the inner validator.
///
/// Only absence is tolerated. An explicit `null` is a present value and is
/// handed to the inner validator like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
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

impl<V> Validate for Optional<V>
where
    V: Validate,
{
    fn validate(&self, input: Option<&Value>) -> bool {
        match input {
            None => true,
            Some(_) => self.inner.validate(input),
        }
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{number, string};
    use serde_json::json;

    #[test]
    fn test_optional_absent() {
        assert!(optional(number()).validate(None));
    }

    #[test]
    fn test_optional_present_valid() {
        assert!(optional(number()).is_valid(&json!(5)));
    }

    #[test]
    fn test_optional_present_invalid() {
        assert!(!optional(number()).is_valid(&json!("x")));
    }

    #[test]
    fn test_optional_null_is_not_absent() {
        assert!(!optional(number()).is_valid(&Value::Null));
    }

    #[test]
    fn test_optional_method() {
        let validator = string().optional();
        assert!(validator.validate(None));
        assert!(validator.is_valid(&json!("s")));
        assert_eq!(validator.into_inner(), string());
    }
}
