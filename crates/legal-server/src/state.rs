//! Application State

use std::sync::Arc;

use legal_core::{MemorySessionStore, SessionStore};
use legal_payments::{CallbackVerifier, PaymentProvider, SimulatedPaymentProvider};

use crate::config::ServerConfig;
use crate::service::DocumentService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Preview, payment and download operations
    pub service: Arc<DocumentService>,
}

impl AppState {
    pub fn new(service: DocumentService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Wire the in-memory store and simulated processor from config
    pub fn from_config(config: &ServerConfig) -> Result<Self, legal_payments::PaymentError> {
        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let payments: Arc<dyn PaymentProvider> =
            Arc::new(SimulatedPaymentProvider::new(config.payment_delay));

        let mut service = DocumentService::new(sessions, payments);
        if let Some(secret) = &config.callback_secret {
            service = service.with_callbacks(CallbackVerifier::new(secret)?);
        }
        if let Some(price) = config.document_price {
            service = service.with_price(price);
        }

        Ok(Self::new(service))
    }
}
