//! Document Service
//!
//! The boundary operations behind the HTTP handlers: preview, payment,
//! final download. Handlers only translate requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use legal_core::{DocumentKind, FieldSpec, FieldValues, SessionId, SessionStore, catalog};
use legal_payments::{CallbackVerifier, PaymentCallback, PaymentProvider, PaymentRequest};
use legal_render::{render, stamp, to_pdf_bytes};

use crate::error::ApiError;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Body of a preview request. Every field is optional so that absence is
/// reported as invalid input rather than a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub form_data: Option<serde_json::Value>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of payment and download requests
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAck {
    pub success: bool,
    pub message: String,
    pub receipt_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub sessions: usize,
}

/// Catalog entry describing one document kind
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub id: DocumentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub price: Decimal,
    pub fields: &'static [FieldSpec],
}

/// Unwatermarked document ready for download
#[derive(Debug)]
pub struct FinalDocument {
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

/// Preview/payment/download orchestration over injected collaborators
pub struct DocumentService {
    sessions: Arc<dyn SessionStore>,
    payments: Arc<dyn PaymentProvider>,
    callbacks: Option<CallbackVerifier>,
    price_override: Option<Decimal>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn session_id(value: Option<String>) -> Result<SessionId> {
    required(value)
        .map(SessionId::from_string)
        .ok_or_else(|| ApiError::invalid("Missing sessionId"))
}

impl DocumentService {
    pub fn new(sessions: Arc<dyn SessionStore>, payments: Arc<dyn PaymentProvider>) -> Self {
        Self {
            sessions,
            payments,
            callbacks: None,
            price_override: None,
        }
    }

    /// Accept signed provider callbacks
    #[must_use]
    pub fn with_callbacks(mut self, verifier: CallbackVerifier) -> Self {
        self.callbacks = Some(verifier);
        self
    }

    /// Charge `price` for every document kind
    #[must_use]
    pub const fn with_price(mut self, price: Decimal) -> Self {
        self.price_override = Some(price);
        self
    }

    pub fn price(&self, kind: DocumentKind) -> Decimal {
        self.price_override.unwrap_or_else(|| kind.price())
    }

    /// Render, watermark and serialize a preview, then snapshot the session
    pub fn generate_preview(&self, request: PreviewRequest) -> Result<Vec<u8>> {
        let (Some(kind), Some(form_data), Some(id)) = (
            required(request.document_type),
            request.form_data.filter(|v| !v.is_null()),
            required(request.session_id),
        ) else {
            return Err(ApiError::invalid("Missing required fields"));
        };

        let kind: DocumentKind = kind.parse()?;
        let fields = FieldValues::from_json(&form_data)?;
        let id = SessionId::from_string(id);

        let missing = catalog::missing_required(kind, &fields);
        if !missing.is_empty() {
            tracing::debug!(session_id = %id, ?missing, "Previewing with incomplete form");
        }

        let bytes = to_pdf_bytes(&stamp(render(kind, &fields)))?;
        self.sessions.create_or_update(&id, kind, fields)?;

        tracing::info!(session_id = %id, kind = %kind, bytes = bytes.len(), "Generated preview");
        Ok(bytes)
    }

    /// Run the payment provider, then mark the session paid. The payment
    /// only applies to the snapshot that was current when it started.
    pub async fn confirm_payment(&self, request: SessionRequest) -> Result<PaymentAck> {
        let id = session_id(request.session_id)?;
        let session = self
            .sessions
            .get(&id)?
            .ok_or_else(|| legal_core::DocError::NotFound(id.to_string()))?;

        let charge = PaymentRequest::new(id.as_str(), self.price(session.kind))
            .with_description(session.kind.display_name());
        let receipt = self.payments.charge(&charge).await?;

        if let Err(e) = self.sessions.mark_paid_if(&id, session.generation) {
            tracing::warn!(
                session_id = %id,
                receipt = %receipt.id,
                generation = session.generation,
                "Payment settled but not applied: {}",
                e
            );
            return Err(e.into());
        }

        tracing::info!(
            session_id = %id,
            receipt = %receipt.id,
            provider = self.payments.name(),
            "Payment confirmed"
        );

        Ok(PaymentAck {
            success: true,
            message: "Payment processed successfully".into(),
            receipt_id: receipt.id,
        })
    }

    /// Verify a provider callback and mark its session paid on success
    pub fn apply_payment_callback(
        &self,
        body: &[u8],
        signature: Option<&str>,
    ) -> Result<PaymentCallback> {
        let verifier = self.callbacks.as_ref().ok_or(ApiError::CallbacksDisabled)?;
        let signature = signature.ok_or_else(|| {
            legal_payments::PaymentError::Signature("missing signature header".into())
        })?;

        let callback = verifier.verify(body, signature)?;
        let id = SessionId::from_string(callback.session_id.clone());

        if callback.is_success() {
            self.sessions.mark_paid(&id)?;
            tracing::info!(session_id = %id, reference = ?callback.reference, "Callback marked session paid");
        } else {
            tracing::warn!(session_id = %id, status = ?callback.status, "Ignoring unsuccessful payment callback");
        }

        Ok(callback)
    }

    /// Render the unwatermarked document for a paid session
    pub fn download_final(&self, request: SessionRequest) -> Result<FinalDocument> {
        let id = session_id(request.session_id)?;
        let (kind, fields) = self.sessions.finalize(&id)?;

        let bytes = to_pdf_bytes(&render(kind, &fields))?;
        tracing::info!(session_id = %id, kind = %kind, bytes = bytes.len(), "Released final document");

        Ok(FinalDocument { kind, bytes })
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "OK",
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            sessions: self.sessions.len().unwrap_or_else(|e| {
                tracing::warn!("Session count unavailable: {}", e);
                0
            }),
        }
    }

    pub fn documents(&self) -> Vec<DocumentInfo> {
        DocumentKind::ALL
            .iter()
            .map(|&kind| DocumentInfo {
                id: kind,
                title: kind.display_name(),
                description: catalog::description(kind),
                price: self.price(kind),
                fields: catalog::fields(kind),
            })
            .collect()
    }
}
