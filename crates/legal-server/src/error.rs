//! API Error Responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use legal_core::DocError;
use legal_payments::PaymentError;

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Document(#[from] DocError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Callback route hit without a configured secret
    #[error("Payment callbacks are not configured")]
    CallbacksDisabled,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Document(DocError::InvalidInput(message.into()))
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Document(e) => match e {
                DocError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                DocError::NotFound(_) => StatusCode::NOT_FOUND,
                DocError::PaymentRequired(_) => StatusCode::FORBIDDEN,
                DocError::SessionReplaced(_) => StatusCode::CONFLICT,
                DocError::InternalRenderFault(_) | DocError::Storage(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Payment(e) => match e {
                PaymentError::Signature(_) | PaymentError::CallbackParse(_) => {
                    StatusCode::BAD_REQUEST
                }
                PaymentError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
                PaymentError::Declined(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::CallbacksDisabled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Document(e) => e.code(),
            Self::Payment(PaymentError::Declined(_)) => "PAYMENT_FAILED",
            Self::Payment(PaymentError::Signature(_)) => "INVALID_SIGNATURE",
            Self::Payment(PaymentError::CallbackParse(_)) => "INVALID_CALLBACK",
            Self::Payment(PaymentError::Config(_)) | Self::CallbacksDisabled => "PAYMENTS_DISABLED",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Document(e) => e.user_message(),
            Self::Payment(e) => e.user_message().into(),
            Self::CallbacksDisabled => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "Request failed: {}", self);
        } else {
            tracing::debug!(code = self.code(), "Request rejected: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.message(),
            code: self.code().into(),
        });

        (status, body).into_response()
    }
}
