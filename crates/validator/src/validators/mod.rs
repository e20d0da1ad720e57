//! Built-in leaf validators
//!
//! # Categories
//!
//! - **Kind**: string, number, boolean, anything
//! - **Choice**: exact value, one of a set, all of a set
//! - **Numeric**: strict and non-strict comparisons
//! - **Size**: maximum array length
//!
//! # Examples
//!
//! ```
//! use conform_validator::prelude::*;
//! use serde_json::json;
//!
//! let port = number().and(gt(0)).and(lte(65_535));
//! assert!(port.is_valid(&json!(8080)));
//!
//! let level = some(["debug", "info", "warn", "error"]);
//! assert!(!level.is_valid(&json!("verbose")));
//! ```

pub mod choice;
pub mod kind;
pub mod range;
pub mod size;

pub use choice::{AllOf, Equal, OneOf, equal, every, some};
pub use kind::{Anything, IsBoolean, IsNumber, IsString, any, boolean, number, string};
pub use range::{Gt, Gte, Lt, Lte, gt, gte, lt, lte};
pub use size::{MaxLen, max_len};
