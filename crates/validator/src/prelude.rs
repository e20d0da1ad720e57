//! Prelude module for convenient imports.
//!
//! Provides a single `use conform_validator::prelude::*;` import that brings
//! in the traits, every built-in validator and combinator, and the schema
//! macros.
//!
//! # Examples
//!
//! ```
//! use conform_validator::prelude::*;
//! use serde_json::json;
//!
//! let tags = array(string()).and(max_len(10));
//! let ratio = gte(0).and(lte(1));
//! assert!(tags.is_valid(&json!(["a", "b"])));
//! assert!(ratio.is_valid(&json!(0.5)));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, value model
// ============================================================================

pub use crate::Value;
pub use crate::foundation::{BoxValidator, Error, Validate, ValidateExt};

// ============================================================================
// VALIDATORS: All built-in leaf validators
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Array, Object, ObjectMapOf, Optional, Or, and, array, object, object_map_of, optional,
    or,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{any_of, compose, object};
