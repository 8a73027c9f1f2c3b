//! In-memory implementation of [`SessionStore`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tenantry_core::directory::SessionStore;
use tenantry_core::error::DirectoryError;
use tenantry_core::models::session::SessionRecord;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a session for a user with the given lifetime.
    ///
    /// The identifier is an unguessable random UUID; the caller hands
    /// it to the client (typically via an HTTP-only cookie).
    pub async fn create(&self, user_id: Uuid, lifetime: Duration) -> SessionRecord {
        let now = Utc::now();
        let record = SessionRecord {
            id: Uuid::new_v4().to_string(),
            user_id,
            created_at: now,
            expires_at: now + lifetime,
        };
        let mut sessions = self.sessions.write().await;
        // Creation doubles as the sweep point for dead records.
        sessions.retain(|_, existing| !existing.is_expired_at(now));
        sessions.insert(record.id.clone(), record.clone());
        record
    }

    /// Insert a pre-built record, crafted expiry included.
    pub async fn insert(&self, record: SessionRecord) {
        self.sessions.write().await.insert(record.id.clone(), record);
    }

    pub async fn contains(&self, session_id: &str) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }
}

impl SessionStore for MemorySessionStore {
    /// Expired records read as absent and are reaped on contact.
    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, DirectoryError> {
        let mut sessions = self.sessions.write().await;
        let expired = sessions
            .get(session_id)
            .is_some_and(|record| record.is_expired_at(Utc::now()));
        if expired {
            sessions.remove(session_id);
            return Ok(None);
        }
        Ok(sessions.get(session_id).cloned())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), DirectoryError> {
        // Destroying an unknown session is a no-op, not an error.
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}
