//! Session Store & Entitlement Gate
//!
//! A session correlates a client-chosen token with the document it
//! previewed and whether it has been paid for. State machine per id:
//!
//! ```text
//! create_or_update ──▶ Unpaid ──mark_paid──▶ Paid
//!                       ▲  │                  │
//!                       └──┘◀─────────────────┘
//!                  create_or_update (re-snapshots fields, revokes payment)
//! ```
//!
//! Every snapshot of an id gets the next `generation`. A payment started
//! against one generation is only applied with [`SessionStore::mark_paid_if`]
//! while that generation is still current.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::document::{DocumentKind, FieldValues};
use crate::error::{DocError, Result};

/// Opaque session token chosen by the client
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A previewed document awaiting (or past) payment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,

    pub kind: DocumentKind,

    /// Snapshot taken at preview time
    pub fields: FieldValues,

    pub paid: bool,

    /// Bumped each time the id is re-previewed
    pub generation: u64,

    pub created_at: DateTime<Utc>,

    /// First payment confirmation since the last preview
    pub paid_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(id: SessionId, kind: DocumentKind, fields: FieldValues) -> Self {
        Self {
            id,
            kind,
            fields,
            paid: false,
            generation: 1,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    /// Flip to paid. Repeated calls keep the original payment time.
    pub fn mark_paid(&mut self) {
        if !self.paid {
            self.paid = true;
            self.paid_at = Some(Utc::now());
        }
    }
}

/// Session storage trait
///
/// Implementations only decide where sessions live; the payment gate in
/// [`SessionStore::finalize`] is shared.
pub trait SessionStore: Send + Sync {
    /// Insert or overwrite the session for `id` with `paid = false`
    fn create_or_update(&self, id: &SessionId, kind: DocumentKind, fields: FieldValues)
        -> Result<Session>;

    /// Mark an existing session paid (idempotent)
    fn mark_paid(&self, id: &SessionId) -> Result<Session>;

    /// Mark paid only if the snapshot is still `generation`.
    /// `SessionReplaced` if the id was re-previewed in the meantime.
    fn mark_paid_if(&self, id: &SessionId, generation: u64) -> Result<Session>;

    fn get(&self, id: &SessionId) -> Result<Option<Session>>;

    /// Number of live sessions
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Release the stored snapshot for an unwatermarked render
    fn finalize(&self, id: &SessionId) -> Result<(DocumentKind, FieldValues)> {
        let session = self
            .get(id)?
            .ok_or_else(|| DocError::NotFound(id.to_string()))?;

        if !session.paid {
            return Err(DocError::PaymentRequired(id.to_string()));
        }

        Ok((session.kind, session.fields))
    }
}

/// In-memory session store, lives for the process lifetime
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DocError {
    DocError::Storage("session lock poisoned".into())
}

impl SessionStore for MemorySessionStore {
    fn create_or_update(
        &self,
        id: &SessionId,
        kind: DocumentKind,
        fields: FieldValues,
    ) -> Result<Session> {
        let mut session = Session::new(id.clone(), kind, fields);
        let mut sessions = self.sessions.write().map_err(poisoned)?;

        if let Some(previous) = sessions.get(id) {
            session.generation = previous.generation + 1;
            tracing::debug!(
                session_id = %id,
                generation = session.generation,
                "Replaced session snapshot"
            );
        }

        sessions.insert(id.clone(), session.clone());
        Ok(session)
    }

    fn mark_paid(&self, id: &SessionId) -> Result<Session> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| DocError::NotFound(id.to_string()))?;

        session.mark_paid();
        Ok(session.clone())
    }

    fn mark_paid_if(&self, id: &SessionId, generation: u64) -> Result<Session> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| DocError::NotFound(id.to_string()))?;

        if session.generation != generation {
            return Err(DocError::SessionReplaced(id.to_string()));
        }

        session.mark_paid();
        Ok(session.clone())
    }

    fn get(&self, id: &SessionId) -> Result<Option<Session>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(id).cloned())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.sessions.read().map_err(poisoned)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> FieldValues {
        FieldValues::new().with("fullName", "Jane Doe")
    }

    #[test]
    fn test_create_starts_unpaid() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");

        let session = store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();
        assert!(!session.paid);
        assert!(session.paid_at.is_none());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_finalize_before_payment() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");
        store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();

        let err = store.finalize(&id).unwrap_err();
        assert!(matches!(err, DocError::PaymentRequired(_)));
    }

    #[test]
    fn test_mark_paid_is_idempotent() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");
        store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();

        let first = store.mark_paid(&id).unwrap();
        let second = store.mark_paid(&id).unwrap();
        assert!(first.paid && second.paid);
        assert_eq!(first.paid_at, second.paid_at);

        let (kind, fields) = store.finalize(&id).unwrap();
        assert_eq!(kind, DocumentKind::Will);
        assert_eq!(fields.get("fullName"), Some("Jane Doe"));
    }

    #[test]
    fn test_unknown_session() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("unknown-id");

        assert!(matches!(store.mark_paid(&id), Err(DocError::NotFound(_))));
        assert!(matches!(store.finalize(&id), Err(DocError::NotFound(_))));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_re_preview_revokes_payment() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");
        store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();
        store.mark_paid(&id).unwrap();

        let updated = FieldValues::new().with("principalName", "John Roe");
        store
            .create_or_update(&id, DocumentKind::PowerOfAttorney, updated)
            .unwrap();

        assert!(matches!(store.finalize(&id), Err(DocError::PaymentRequired(_))));

        store.mark_paid(&id).unwrap();
        let (kind, fields) = store.finalize(&id).unwrap();
        assert_eq!(kind, DocumentKind::PowerOfAttorney);
        assert_eq!(fields.get("principalName"), Some("John Roe"));
        assert_eq!(fields.get("fullName"), None);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_snapshot_is_independent_of_caller() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");
        let mut fields = jane();
        store.create_or_update(&id, DocumentKind::Will, fields.clone()).unwrap();

        fields.insert("fullName", "Someone Else");
        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.fields.get("fullName"), Some("Jane Doe"));
    }

    #[test]
    fn test_generation_advances_per_snapshot() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");

        let first = store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();
        let second = store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);

        let other = SessionId::from_string("other");
        let fresh = store.create_or_update(&other, DocumentKind::Will, jane()).unwrap();
        assert_eq!(fresh.generation, 1);
    }

    #[test]
    fn test_payment_for_replaced_snapshot_is_rejected() {
        let store = MemorySessionStore::new();
        let id = SessionId::from_string("abc123");
        let paying_for = store.create_or_update(&id, DocumentKind::Will, jane()).unwrap();

        let swapped = FieldValues::new().with("fullName", "Someone Else");
        store.create_or_update(&id, DocumentKind::Will, swapped).unwrap();

        let err = store.mark_paid_if(&id, paying_for.generation).unwrap_err();
        assert!(matches!(err, DocError::SessionReplaced(_)));
        assert!(matches!(store.finalize(&id), Err(DocError::PaymentRequired(_))));

        let current = store.get(&id).unwrap().unwrap();
        assert!(store.mark_paid_if(&id, current.generation).unwrap().paid);
        assert!(matches!(
            store.mark_paid_if(&SessionId::from_string("unknown-id"), 1),
            Err(DocError::NotFound(_))
        ));
    }
}
