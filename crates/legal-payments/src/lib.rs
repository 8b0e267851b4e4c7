//! # legal-payments
//!
//! Payment collection for document downloads.
//!
//! ## Strategies
//!
//! ### 1. Synchronous charge (current demo)
//!
//! ```text
//! ┌─────────────┐  charge()  ┌──────────────────────┐  receipt  ┌──────────────┐
//! │   Server    │───────────▶│  PaymentProvider     │──────────▶│ mark_paid()  │
//! └─────────────┘            │  (simulated delay)   │           └──────────────┘
//!                            └──────────────────────┘
//! ```
//!
//! ### 2. Provider callback
//!
//! A hosted provider calls back with a signed payload once the customer has
//! paid. [`CallbackVerifier`] checks the HMAC-SHA256 signature and yields a
//! [`PaymentCallback`]; the server then flips the same session flag, so the
//! session state machine does not care which strategy is used.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use legal_payments::{PaymentProvider, PaymentRequest, SimulatedPaymentProvider};
//!
//! let provider = SimulatedPaymentProvider::default();
//! let receipt = provider.charge(&PaymentRequest::new("abc123", dec!(29.99))).await?;
//! ```

mod callback;
mod error;
mod provider;
mod simulated;

pub use callback::{CallbackStatus, CallbackVerifier, PaymentCallback, SIGNATURE_HEADER};
pub use error::{PaymentError, Result};
pub use provider::{PaymentProvider, PaymentReceipt, PaymentRequest};
pub use simulated::SimulatedPaymentProvider;
