//! # legal-core
//!
//! Document model, field catalog and the session entitlement gate shared by
//! the renderer and the HTTP server.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐   preview    ┌──────────────┐   payment   ┌──────────────┐
//! │  FieldValues │─────────────▶│   Session    │────────────▶│   Session    │
//! │  + Kind      │              │   (unpaid)   │             │    (paid)    │
//! └──────────────┘              └──────────────┘             └──────────────┘
//!                                   ▲      │                        │
//!                                   └──────┘ re-preview             ▼
//!                                   (resets paid)             final download
//! ```
//!
//! The `SessionStore` trait keeps the gate independent of where sessions
//! live, so the in-memory store can be swapped for a persistent one.

pub mod catalog;
pub mod document;
pub mod error;
pub mod session;

pub use catalog::{FieldInput, FieldSpec};
pub use document::{DocumentKind, FieldValues};
pub use error::{DocError, Result};
pub use session::{MemorySessionStore, Session, SessionId, SessionStore};
