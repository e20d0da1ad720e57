//! Errors raised at the validation boundary.
//!
//! Validators themselves never fail: a mismatch is `false`. This type only
//! exists for the helpers on [`ValidateExt`](crate::foundation::ValidateExt)
//! that turn a verdict into something `?` can propagate.

/// Boundary error for [`ValidateExt`](crate::foundation::ValidateExt) helpers.
///
/// A rejection deliberately carries no path or reason.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The value did not conform to the declared shape.
    #[error("value does not conform to the declared shape")]
    Rejected,

    /// The input text was not well-formed JSON.
    #[error("input is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The value conformed, but could not be deserialized into the target type.
    #[error("conforming value could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Returns `true` for [`Error::Rejected`].
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Result alias used by the boundary helpers.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_rejected_display() {
        assert_eq!(
            Error::Rejected.to_string(),
            "value does not conform to the declared shape"
        );
        assert!(Error::Rejected.is_rejected());
        assert!(Error::Rejected.source().is_none());
    }

    #[test]
    fn test_json_error_keeps_source() {
        let inner = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = Error::Json(inner);
        assert!(!err.is_rejected());
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("input is not valid JSON"));
    }
}
