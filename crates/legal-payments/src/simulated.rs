//! Simulated Payment Provider
//!
//! Stands in for an external processor: waits a fixed delay, then approves.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

use crate::error::{PaymentError, Result};
use crate::provider::{PaymentProvider, PaymentReceipt, PaymentRequest};

/// Default processing delay
const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Provider that approves every charge after a pause
pub struct SimulatedPaymentProvider {
    delay: Duration,
    decline: bool,
}

impl Default for SimulatedPaymentProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl SimulatedPaymentProvider {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            decline: false,
        }
    }

    /// No delay (for testing)
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Decline every charge (for testing failure paths)
    #[must_use]
    pub const fn declining(mut self) -> Self {
        self.decline = true;
        self
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl PaymentProvider for SimulatedPaymentProvider {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentReceipt> {
        tracing::info!(
            session_id = %request.session_id,
            amount = %request.amount,
            delay_ms = %self.delay.as_millis(),
            "Processing simulated payment"
        );

        // Yields to the runtime, other sessions keep being served
        tokio::time::sleep(self.delay).await;

        if self.decline {
            return Err(PaymentError::Declined("simulated decline".into()));
        }

        Ok(PaymentReceipt {
            id: format!("sim_{}", uuid::Uuid::new_v4().simple()),
            session_id: request.session_id.clone(),
            amount: request.amount,
            currency: request.currency.clone(),
            paid_at: Utc::now(),
        })
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
