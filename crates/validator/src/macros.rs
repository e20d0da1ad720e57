//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: Create a leaf validator (struct + `Validate` impl + factory fn)
//! - [`object!`]: Declare an object schema field by field
//! - [`compose!`]: AND-chain multiple validators
//! - [`any_of!`]: OR-chain multiple validators
//!
//! # Examples
//!
//! ```
//! use conform_validator::validator;
//! use conform_validator::foundation::Validate;
//! use serde_json::json;
//!
//! validator! {
//!     /// Accepts `null`.
//!     pub IsNull;
//!     rule(value) { value.is_null() }
//!     fn null();
//! }
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinChars { min: usize };
//!     rule(self, value) { value.as_str().is_some_and(|s| s.chars().count() >= self.min) }
//!     fn min_chars(min: usize);
//! }
//!
//! assert!(null().validate(Some(&json!(null))));
//! assert!(min_chars(2).validate(Some(&json!("ab"))));
//! assert!(!min_chars(2).validate(None));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a leaf validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// The `rule` block sees the value only when it is present; an absent value
/// is always rejected. Validators that must accept absence implement
/// [`Validate`](crate::foundation::Validate) by hand.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub IsString;
///     rule(value) { value.is_string() }
///     fn string();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLen { max: usize };
///     rule(self, value) { value.as_array().is_some_and(|a| a.len() <= self.max) }
///     fn max_len(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub Gt { bound: f64 };
///     rule(self, value) { value.as_f64().is_some_and(|n| n > self.bound) }
///     new(bound: impl Into<f64>) { Self { bound: bound.into() } }
///     fn gt(bound: impl Into<f64>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&self, input: Option<&$crate::Value>) -> bool {
                match input {
                    Some($inp) => $rule,
                    None => false,
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&$self_, input: Option<&$crate::Value>) -> bool {
                match input {
                    Some($inp) => $rule,
                    None => false,
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&$self_, input: Option<&$crate::Value>) -> bool {
                match input {
                    Some($inp) => $rule,
                    None => false,
                }
            }
        }
    };
}

// ============================================================================
// OBJECT MACRO
// ============================================================================

/// Declares an [`Object`](crate::combinators::Object) schema.
///
/// Fields are checked in the order they are written.
///
/// ```
/// use conform_validator::prelude::*;
/// use serde_json::json;
///
/// let point = object! {
///     "x" => number(),
///     "y" => number(),
///     "label" => optional(string()),
/// };
/// assert!(point.is_valid(&json!({ "x": 0, "y": 1 })));
/// assert!(!point.is_valid(&json!({ "x": 0 })));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::combinators::Object::new()
    };
    ($($key:expr => $validator:expr),+ $(,)?) => {
        $crate::combinators::Object::new()$(.field($key, $validator))+
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic, left to right.
///
/// ```rust,ignore
/// let validator = compose![number(), gte(0), lt(256)];
/// ```
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::and($first, $crate::compose!($($rest),+))
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic, left to right.
///
/// ```rust,ignore
/// let validator = any_of![string(), number(), boolean()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::or($first, $crate::any_of!($($rest),+))
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Validate;
    use crate::validators::{boolean, number, string};
    use serde_json::json;

    validator! {
        /// A test unit validator.
        TestNotEmpty;
        rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
        fn test_not_empty();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNotEmpty;
        assert!(v.validate(Some(&json!("hello"))));
        assert!(!v.validate(Some(&json!(""))));
    }

    #[test]
    fn test_unit_factory_rejects_absent() {
        assert!(test_not_empty().validate(Some(&json!("x"))));
        assert!(!test_not_empty().validate(None));
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMinItems { min: usize };
        rule(self, value) { value.as_array().is_some_and(|a| a.len() >= self.min) }
        fn test_min_items(min: usize);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestMinItems { min: 2 };
        assert!(v.validate(Some(&json!([1, 2]))));
        assert!(!v.validate(Some(&json!([1]))));
        assert!(!v.validate(Some(&json!("ab"))));
    }

    #[test]
    fn test_struct_new_and_factory() {
        assert_eq!(TestMinItems::new(3), test_min_items(3));
        assert!(test_min_items(0).validate(Some(&json!([]))));
    }

    validator! {
        #[derive(Copy, PartialEq)]
        TestAtLeast { floor: f64 };
        rule(self, value) { value.as_f64().is_some_and(|n| n >= self.floor) }
        new(floor: impl Into<f64>) { Self { floor: floor.into() } }
        fn test_at_least(floor: impl Into<f64>);
    }

    #[test]
    fn test_custom_new() {
        let v = test_at_least(2);
        assert_eq!(v.floor, 2.0);
        assert!(v.validate(Some(&json!(2.5))));
        assert!(!v.validate(Some(&json!(1))));
    }

    validator! {
        TestAlwaysOk;
        rule(value) { true }
    }

    #[test]
    fn test_unit_without_factory() {
        assert!(TestAlwaysOk.validate(Some(&json!(null))));
        assert!(!TestAlwaysOk.validate(None));
    }

    #[test]
    fn test_compose() {
        let v = compose![test_at_least(1), test_at_least(3)];
        assert!(v.validate(Some(&json!(3))));
        assert!(!v.validate(Some(&json!(2))));

        let single = compose![number()];
        assert!(single.validate(Some(&json!(0))));
    }

    #[test]
    fn test_any_of() {
        let v = any_of![string(), number(), boolean(),];
        assert!(v.validate(Some(&json!(false))));
        assert!(v.validate(Some(&json!("s"))));
        assert!(!v.validate(Some(&json!(null))));
    }

    #[test]
    fn test_object_macro() {
        let empty = object! {};
        assert!(empty.validate(Some(&json!({ "any": "thing" }))));

        let v = object! { "a" => number() };
        assert!(v.validate(Some(&json!({ "a": 1 }))));
        assert!(!v.validate(Some(&json!({ "a": "1" }))));
    }
}
