//! Combinators for composing validators
//!
//! - **Structural**: [`Array`], [`ObjectMapOf`], [`Object`] build validators
//!   for containers out of validators for their contents.
//! - **Logical**: [`And`], [`Or`], [`Optional`] combine or wrap existing
//!   validators.
//!
//! Every combinator is a plain value that owns its sub-validators. Evaluation
//! is a depth-first walk over the input that stops as soon as the answer is
//! known.
//!
//! # Examples
//!
//! ```
//! use conform_validator::prelude::*;
//! use serde_json::json;
//!
//! let order = object! {
//!     "id" => string().or(number()),
//!     "lines" => array(object! {
//!         "sku" => string(),
//!         "qty" => number().and(gt(0)),
//!     }).and(max_len(100)),
//!     "meta" => optional(object_map_of(string())),
//! };
//!
//! assert!(order.is_valid(&json!({
//!     "id": 17,
//!     "lines": [{ "sku": "A-1", "qty": 2 }],
//! })));
//! assert!(!order.is_valid(&json!({
//!     "id": 17,
//!     "lines": [{ "sku": "A-1", "qty": 0 }],
//! })));
//! ```

pub mod and;
pub mod array;
pub mod map_of;
pub mod object;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use array::{Array, array};
pub use map_of::{ObjectMapOf, object_map_of};
pub use object::{Object, object};
pub use optional::{Optional, optional};
pub use or::{Or, or};
