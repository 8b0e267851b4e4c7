//! HTTP Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use legal_payments::SIGNATURE_HEADER;

use crate::error::ApiError;
use crate::service::{DocumentInfo, HealthResponse, PaymentAck, PreviewRequest, SessionRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CallbackAck {
    pub success: bool,
}

/// Unwrap a JSON body, turning malformed payloads into invalid input
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::invalid(rejection.body_text()))
}

fn pdf(bytes: Vec<u8>, disposition: &str) -> Response {
    let disposition = HeaderValue::from_str(disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.service.health())
}

pub async fn list_documents(State(state): State<AppState>) -> Json<Vec<DocumentInfo>> {
    Json(state.service.documents())
}

pub async fn generate_preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let bytes = state.service.generate_preview(body(payload)?)?;
    Ok(pdf(bytes, "inline; filename=preview.pdf"))
}

pub async fn simulate_payment(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<PaymentAck>, ApiError> {
    let ack = state.service.confirm_payment(body(payload)?).await?;
    Ok(Json(ack))
}

pub async fn download_final(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let document = state.service.download_final(body(payload)?)?;
    let disposition = format!("attachment; filename={}", document.kind.filename());
    Ok(pdf(document.bytes, &disposition))
}

/// Signed notification from a payment processor
pub async fn payment_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CallbackAck>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    let callback = state.service.apply_payment_callback(&body, signature)?;
    Ok(Json(CallbackAck {
        success: callback.is_success(),
    }))
}
