//! User record model.
//!
//! Owned by the external user directory; this core reads it on every
//! authenticated request and writes only the last-login timestamp (and
//! only on the login entry point).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::permission::PermissionSet;
use crate::models::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// `None` only for platform admins, which are not bound to a company.
    pub company_id: Option<Uuid>,
    pub email: String,
    /// PHC-format password hash (never a plaintext secret).
    pub password_hash: String,
    pub role: Role,
    pub status: UserStatus,
    /// Explicit permission overrides on top of whatever the role grants.
    pub permissions: PermissionSet,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
