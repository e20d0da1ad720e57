//! # conform-validator
//!
//! Composable runtime shape validators for untyped JSON input.
//!
//! A validator is a pure predicate over a [`serde_json::Value`]. Leaf
//! validators check scalar kinds, exact values and numeric bounds;
//! combinators build validators for arrays, dictionaries and records out of
//! smaller ones and join them with AND / OR / optional. The nested value of
//! combinators *is* the schema.
//!
//! ## Quick Start
//!
//! ```
//! use conform_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = object! {
//!     "a" => number(),
//!     "b" => optional(string()),
//!     "e" => object! { "a" => number() },
//! };
//!
//! assert!(schema.is_valid(&json!({ "a": 1, "e": { "a": 2 } })));
//! assert!(!schema.is_valid(&json!({ "a": 1, "e": null })));
//! ```
//!
//! ## Built-in Validators
//!
//! - **Kind**: [`string`](validators::string), [`number`](validators::number),
//!   [`boolean`](validators::boolean), [`any`](validators::any)
//! - **Choice**: [`equal`](validators::equal), [`some`](validators::some),
//!   [`every`](validators::every)
//! - **Numeric**: [`gt`](validators::gt), [`gte`](validators::gte),
//!   [`lt`](validators::lt), [`lte`](validators::lte)
//! - **Size**: [`max_len`](validators::max_len)
//!
//! ## Combinators
//!
//! [`array`](combinators::array), [`object_map_of`](combinators::object_map_of),
//! [`object`](combinators::object), [`optional`](combinators::optional),
//! [`and`](combinators::and), [`or`](combinators::or).
//!
//! ## Absent vs. null
//!
//! Validators receive `Option<&Value>`. `None` means the value is absent
//! (a record field that is not there); `Some(&Value::Null)` is an explicit
//! `null`. Only [`optional`](combinators::optional) and
//! [`any`](validators::any) accept an absent value.
//!
//! ## Features
//!
//! - `tracing` (default): debug-level events when the boundary helpers on
//!   [`ValidateExt`](foundation::ValidateExt) reject input.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::{Error, Result};
pub use serde_json::Value;
