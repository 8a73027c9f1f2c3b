//! Authentication resolution: from a raw credential to a [`Principal`].
//!
//! The resolver re-reads the live user and company records on every
//! call, so role and permission edits take effect on the next request
//! without waiting for token expiry. Authentication failures collapse
//! to [`AuthError::Unauthenticated`]; the caller learns nothing about
//! which step failed. Tenant suspension is the one deliberate
//! exception and surfaces as [`AuthError::TenantSuspended`].

use chrono::{DateTime, Utc};
use tenantry_core::directory::{CompanyDirectory, SessionStore, UserDirectory};
use tenantry_core::error::{AuthError, AuthResult};
use tenantry_core::models::principal::Principal;
use tenantry_core::models::user::User;
use uuid::Uuid;

use crate::token::{Claims, TokenService};

/// A credential extracted from an inbound request.
///
/// Transport layers own the extraction (header or cookie); both
/// carriers feed the same resolution pipeline.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Signed bearer token.
    Bearer(String),
    /// Opaque server-side session identifier.
    Session(String),
}

/// Resolves request credentials against live directory state.
pub struct Resolver<U, C, S> {
    users: U,
    companies: C,
    sessions: S,
    tokens: TokenService,
}

impl<U, C, S> Resolver<U, C, S>
where
    U: UserDirectory,
    C: CompanyDirectory,
    S: SessionStore,
{
    pub fn new(users: U, companies: C, sessions: S, tokens: TokenService) -> Self {
        Self {
            users,
            companies,
            sessions,
            tokens,
        }
    }

    /// Resolve a credential to a [`Principal`].
    ///
    /// Bearer tokens are verified (signature, expiry, issuer) and then
    /// checked against the live user record; sessions are looked up and
    /// checked for expiry. Either way the principal is built from
    /// current directory state, never from token claims alone.
    pub async fn resolve(&self, credential: &Credential) -> AuthResult<Principal> {
        let now = Utc::now();

        match credential {
            Credential::Bearer(token) => {
                let claims = self.tokens.verify(token).map_err(|err| {
                    tracing::debug!(error = %err, "bearer token rejected");
                    AuthError::Unauthenticated
                })?;
                principal_from_claims(&self.users, &self.companies, &claims, now).await
            }
            Credential::Session(session_id) => {
                let record = self
                    .sessions
                    .get(session_id)
                    .await
                    .map_err(|err| {
                        tracing::warn!(error = %err, "session store lookup failed");
                        AuthError::Unauthenticated
                    })?
                    .ok_or(AuthError::Unauthenticated)?;
                if record.is_expired_at(now) {
                    return Err(AuthError::Unauthenticated);
                }

                let user = load_user(&self.users, record.user_id).await?;
                principal_for_user(&self.companies, user, now).await
            }
        }
    }
}

/// Resolve verified token claims against live directory state.
///
/// Shared between bearer resolution and token refresh: both must
/// re-check the live account and keep the token's tenant binding
/// honest.
pub(crate) async fn principal_from_claims<U, C>(
    users: &U,
    companies: &C,
    claims: &Claims,
    now: DateTime<Utc>,
) -> AuthResult<Principal>
where
    U: UserDirectory,
    C: CompanyDirectory,
{
    let user_id = claims.user_id().ok_or(AuthError::Unauthenticated)?;
    let user = load_user(users, user_id).await?;

    // A tenant-scoped token must still point at the company the live
    // record binds to.
    if !user.role.is_platform_admin() && claims.company_uuid() != user.company_id {
        tracing::warn!(user_id = %user.id, "token tenant does not match live record");
        return Err(AuthError::Unauthenticated);
    }

    principal_for_user(companies, user, now).await
}

/// Build a [`Principal`] from a live user record.
///
/// Enforces the model invariants: the account must be active, a
/// tenant-scoped role must belong to an operable company, and platform
/// admins carry no tenant binding.
pub(crate) async fn principal_for_user<C>(
    companies: &C,
    user: User,
    now: DateTime<Utc>,
) -> AuthResult<Principal>
where
    C: CompanyDirectory,
{
    if !user.is_active() {
        return Err(AuthError::Unauthenticated);
    }

    if user.role.is_platform_admin() {
        return Ok(Principal {
            user_id: user.id,
            company_id: None,
            email: user.email,
            role: user.role,
            permissions: user.permissions,
            company: None,
        });
    }

    let company_id = user.company_id.ok_or_else(|| {
        tracing::warn!(user_id = %user.id, "tenant-scoped user has no company binding");
        AuthError::Unauthenticated
    })?;

    let company = companies
        .get_by_id(company_id)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "company directory lookup failed");
            AuthError::Unauthenticated
        })?
        .ok_or(AuthError::Unauthenticated)?;

    if let Some(reason) = company.state_at(now).suspension_reason() {
        return Err(AuthError::suspended(reason));
    }

    Ok(Principal {
        user_id: user.id,
        company_id: Some(company_id),
        email: user.email,
        role: user.role,
        permissions: user.permissions,
        company: Some(company.snapshot()),
    })
}

async fn load_user<U: UserDirectory>(users: &U, user_id: Uuid) -> AuthResult<User> {
    users
        .get_by_id(user_id)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "user directory lookup failed");
            AuthError::Unauthenticated
        })?
        .ok_or(AuthError::Unauthenticated)
}
