//! # Store Errors
//!
//! Every failure a collection or its client can report. Callers are expected to surface
//! the `Display` text to users, so each variant renders a readable message.

/// Errors reported by a [`Collection`](crate::Collection) or its client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The collection task is gone; the request never reached it.
    #[error("store unavailable")]
    Unavailable,
    #[error("store dropped the request")]
    Dropped,
    #[error("document not found: {0}")]
    NotFound(String),
    /// The id generator produced an id that is already stored.
    #[error("document already exists: {0}")]
    AlreadyExists(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// A document hook refused the write.
    #[error("document rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
    /// Free-form failure reported by a backend; the message is passed through untouched.
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// The user-facing message, or `None` when the backend gave nothing to show.
    pub fn message(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_backend_message_is_treated_as_absent() {
        assert_eq!(StoreError::Backend(String::new()).message(), None);
        assert_eq!(
            StoreError::Backend("quota exceeded".into()).message().as_deref(),
            Some("quota exceeded")
        );
    }

    #[test]
    fn not_found_names_the_id() {
        let err = StoreError::NotFound("abc".into());
        assert_eq!(err.to_string(), "document not found: abc");
    }
}
