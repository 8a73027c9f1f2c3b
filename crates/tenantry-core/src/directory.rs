//! Directory trait definitions for the external record stores.
//!
//! All lookups are async. Absence of a record is `Ok(None)`;
//! [`DirectoryError`] is reserved for infrastructure failures, which
//! every consumer in this system treats as a denial (fail closed).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DirectoryError;
use crate::models::company::Company;
use crate::models::session::SessionRecord;
use crate::models::user::User;

/// Read access to user records, plus the single write this core performs.
pub trait UserDirectory: Send + Sync {
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, DirectoryError>> + Send;

    /// Look up by email, optionally narrowed to one company (emails are
    /// only guaranteed unique per company).
    fn get_by_email(
        &self,
        email: &str,
        company_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Option<User>, DirectoryError>> + Send;

    /// Record a successful login. Called from the login flow only, never
    /// from per-request resolution.
    fn record_login(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}

/// Read access to company (tenant) records.
pub trait CompanyDirectory: Send + Sync {
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Company>, DirectoryError>> + Send;
}

/// Server-side session state for the cookie identity carrier.
pub trait SessionStore: Send + Sync {
    /// Resolve a session identifier. Expired sessions resolve to `None`.
    fn get(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<Option<SessionRecord>, DirectoryError>> + Send;

    /// Destroy a session (logout). Destroying an unknown session is not
    /// an error.
    fn destroy(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}
