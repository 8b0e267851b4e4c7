//! Payment Provider Abstraction

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A charge for one document download
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub session_id: String,

    pub amount: Decimal,

    /// ISO 4217 code
    pub currency: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl PaymentRequest {
    /// USD charge for a session
    pub fn new(session_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            session_id: session_id.into(),
            amount,
            currency: "USD".into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Proof of a successful charge
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Provider reference
    pub id: String,
    pub session_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub paid_at: DateTime<Utc>,
}

/// Payment provider trait (Strategy pattern)
///
/// Implement this for each processor. A provider that settles
/// asynchronously can instead report through a signed callback.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Collect payment, returning once the charge has settled
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentReceipt>;

    /// Provider name
    fn name(&self) -> &str;
}
