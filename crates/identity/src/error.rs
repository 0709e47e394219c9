//! Library error taxonomy.
//!
//! Services return the most specific error they can determine; only failures
//! with no better classification collapse into [`IdentityError::Store`].
//! Nothing here is retried - retry policy belongs to the caller or the store
//! client.

use thiserror::Error;

use crate::db::StoreError;

/// Errors returned by the identity services.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A flexible-id lookup was requested without a flexible id.
    #[error("missing flexible id")]
    MissingFlexId,

    /// The flexible-id kind is unset or not enabled by resolver policy.
    #[error("invalid flexible id type")]
    InvalidFlexIdType,

    /// No user matches the given id or flexible-id mapping.
    #[error("user not found")]
    UserNotFound,

    /// Free text did not normalize to a label, or no stored address
    /// carries the normalized label.
    #[error("no address match")]
    NoAddressMatch,

    /// A configuration value is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Any store failure not otherwise classified.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for identity operations.
pub type Result<T> = std::result::Result<T, IdentityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(IdentityError::MissingFlexId.to_string(), "missing flexible id");
        assert_eq!(
            IdentityError::InvalidConfiguration("negative window".to_owned()).to_string(),
            "invalid configuration: negative window"
        );
    }

    #[test]
    fn test_store_error_wraps() {
        let err = IdentityError::from(StoreError::DataCorruption("bad row".to_owned()));
        assert!(matches!(err, IdentityError::Store(_)));
    }
}
