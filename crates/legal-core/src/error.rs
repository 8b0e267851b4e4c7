//! Error Types

use thiserror::Error;

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocError>;

/// Document service error types
#[derive(Error, Debug)]
pub enum DocError {
    /// Missing or malformed request input, or an unknown document kind
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No session exists for the given id
    #[error("Session not found: {0}")]
    NotFound(String),

    /// Final download attempted before payment
    #[error("Payment required for session {0}")]
    PaymentRequired(String),

    /// Layout or serialization failed
    #[error("Render fault: {0}")]
    InternalRenderFault(String),

    /// The session was re-previewed while a payment for it was in flight
    #[error("Session {0} was replaced during payment")]
    SessionReplaced(String),

    /// Session storage failed (e.g. poisoned lock)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DocError {
    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::PaymentRequired(_) => "PAYMENT_REQUIRED",
            Self::SessionReplaced(_) => "SESSION_REPLACED",
            Self::InternalRenderFault(_) => "RENDER_FAULT",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::NotFound(_) => "Session not found. Please generate a new preview.".into(),
            Self::PaymentRequired(_) => "Payment required".into(),
            Self::SessionReplaced(_) => {
                "Document changed during payment. Please review the new preview and pay again."
                    .into()
            }
            Self::InternalRenderFault(_) => "Failed to generate document".into(),
            Self::Storage(_) => "An unexpected error occurred.".into(),
        }
    }

    /// Whether the failure is on the server side rather than the caller's
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InternalRenderFault(_) | Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_per_kind() {
        assert_eq!(DocError::InvalidInput("x".into()).code(), "INVALID_INPUT");
        assert_eq!(DocError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(DocError::PaymentRequired("x".into()).code(), "PAYMENT_REQUIRED");
        assert_eq!(DocError::SessionReplaced("x".into()).code(), "SESSION_REPLACED");
        assert_eq!(DocError::InternalRenderFault("x".into()).code(), "RENDER_FAULT");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = DocError::InternalRenderFault("lopdf exploded".into());
        assert!(err.is_internal());
        assert!(!err.user_message().contains("lopdf"));
        assert!(!DocError::NotFound("abc".into()).is_internal());
    }
}
