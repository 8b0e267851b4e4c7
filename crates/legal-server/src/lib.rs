//! # legal-server
//!
//! HTTP surface of the legal document service: watermarked previews,
//! simulated payment, and final downloads gated on payment.

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse};
pub use service::DocumentService;
pub use state::AppState;

use crate::handlers::{
    download_final, generate_preview, health_check, list_documents, payment_callback,
    simulate_payment,
};

/// Request body limit for form submissions
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & catalog
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/documents", get(list_documents))

        // Documents
        .route("/api/generate-preview", post(generate_preview))
        .route("/api/download-final", post(download_final))

        // Payments
        .route("/api/simulate-payment", post(simulate_payment))
        .route("/api/payment-callback", post(payment_callback))

        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
