//! Error types for the storefront.

use crate::config::ConfigError;
use document_store::StoreError;
use thiserror::Error;

/// Local precondition failures, detected before any store call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("price must be > 0")]
    InvalidPrice,
}

/// Failure of a storefront operation.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend failed or refused; never retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StorefrontError {
    /// The text to show the user: the validation message, the store's message, or
    /// `default` when the store did not give one.
    pub fn display_message(&self, default: &str) -> String {
        match self {
            StorefrontError::Validation(e) => e.to_string(),
            StorefrontError::Store(e) => e.message().unwrap_or_else(|| default.to_string()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StorefrontError::Validation(_))
    }
}

/// Errors from starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("collection task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_message_is_forwarded() {
        let err = StorefrontError::from(StoreError::Backend("quota exceeded".into()));
        assert_eq!(err.display_message("could not save product"), "quota exceeded");
    }

    #[test]
    fn default_is_used_when_store_is_silent() {
        let err = StorefrontError::from(StoreError::Backend(String::new()));
        assert_eq!(
            err.display_message("could not save product"),
            "could not save product"
        );
    }

    #[test]
    fn validation_message_ignores_default() {
        let err = StorefrontError::from(ValidationError::InvalidPrice);
        assert_eq!(err.display_message("unused"), "price must be > 0");
        assert!(err.is_validation());
    }
}
