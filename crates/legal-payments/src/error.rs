//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The provider refused the charge
    #[error("Payment declined: {0}")]
    Declined(String),

    /// Callback signature verification failed
    #[error("Callback signature invalid: {0}")]
    Signature(String),

    /// Callback payload parsing failed
    #[error("Callback parse error: {0}")]
    CallbackParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Whether the caller sent something wrong (as opposed to a provider failure)
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Signature(_) | Self::CallbackParse(_))
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &str {
        match self {
            Self::Declined(_) => "Payment processing failed",
            Self::Signature(_) => "Invalid signature",
            Self::CallbackParse(_) => "Malformed payment callback",
            Self::Config(_) => "Payments are not configured",
        }
    }
}
