//! Session record model.
//!
//! The legacy/browser identity carrier: an opaque, unguessable session
//! identifier bound server-side to a user id. The core only consumes the
//! `session id → user id` mapping; everything else about a session
//! belongs to the store that owns it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque session identifier as delivered in the cookie.
    pub id: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
