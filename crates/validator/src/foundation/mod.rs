//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`Error`], raised only by the boundary helpers
//! - **Value helpers**: [`strict_equal`], [`kind_of`]
//!
//! # Architecture
//!
//! ## 1. One value model
//!
//! Every validator inspects a [`serde_json::Value`]. Absence is modelled
//! outside the value as `Option<&Value>`, so "field missing" and "field is
//! `null`" stay distinguishable.
//!
//! ## 2. Composition is schema construction
//!
//! There is no separate schema description. A schema is the nested value of
//! combinators that checks it:
//!
//! ```
//! use conform_validator::prelude::*;
//! use serde_json::json;
//!
//! let user = object! {
//!     "name" => string(),
//!     "age" => optional(gte(0)),
//!     "tags" => array(string()).and(max_len(8)),
//! };
//!
//! assert!(user.is_valid(&json!({ "name": "ada", "tags": ["x"] })));
//! assert!(!user.is_valid(&json!({ "name": "ada", "age": -1, "tags": [] })));
//! ```
//!
//! ## 3. Booleans, not diagnostics
//!
//! A validator answers yes or no. Callers that want `?` propagation use
//! [`ValidateExt::ensure`], which maps `false` to [`Error::Rejected`].

pub mod error;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use traits::{BoxValidator, Validate, ValidateExt};
pub use value::{kind_of, strict_equal};
