//! Login, refresh, and logout orchestration.
//!
//! The flows compose the credential verifier, token service, and
//! directory traits into the three entry points a transport layer
//! exposes. All live-state rules from request resolution apply here
//! too: a principal is only ever built from current directory records.

use chrono::Utc;
use tenantry_core::directory::{CompanyDirectory, SessionStore, UserDirectory};
use tenantry_core::error::{AuthError, AuthResult};
use tenantry_core::models::principal::Principal;
use tenantry_core::models::role::Role;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::password;
use crate::resolver::{self, Credential};
use crate::token::TokenService;

/// Fresh-credential login request.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Role the caller claims to hold; must match the live record.
    pub role: Role,
    /// Optional company narrowing for deployments that reuse an email
    /// across tenants.
    pub company_hint: Option<Uuid>,
}

/// Successful login or refresh result.
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub principal: Principal,
    /// Signed bearer token carrying the principal's claims.
    pub token: String,
}

/// Login, refresh, and logout against a directory backend.
pub struct AuthFlows<U, C, S> {
    users: U,
    companies: C,
    sessions: S,
    tokens: TokenService,
}

impl<U, C, S> AuthFlows<U, C, S>
where
    U: UserDirectory,
    C: CompanyDirectory,
    S: SessionStore,
{
    pub fn new(users: U, companies: C, sessions: S, config: &AuthConfig) -> Self {
        Self {
            users,
            companies,
            sessions,
            tokens: TokenService::new(config),
        }
    }

    /// Authenticate fresh credentials and issue a bearer token.
    ///
    /// Every failure before the tenant check reads as
    /// [`AuthError::Unauthenticated`]: an unknown email, a wrong
    /// password, and a claimed role that does not match the account are
    /// deliberately indistinguishable.
    pub async fn login(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let now = Utc::now();

        // 1. Look up the account.
        let user = self
            .users
            .get_by_email(&input.email, input.company_hint)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "user directory lookup failed");
                AuthError::Unauthenticated
            })?
            .ok_or(AuthError::Unauthenticated)?;

        // 2. Verify the password.
        if !password::verify_password(&input.password, &user.password_hash) {
            return Err(AuthError::Unauthenticated);
        }

        // 3. The claimed role must match the live record.
        if input.role != user.role {
            tracing::debug!(user_id = %user.id, "login claimed a different role");
            return Err(AuthError::Unauthenticated);
        }

        // 4. Account status, company status, and principal construction
        //    share one path with request resolution.
        let user_id = user.id;
        let principal = resolver::principal_for_user(&self.companies, user, now).await?;

        // 5. Issue the token.
        let token = self.tokens.issue(&principal).map_err(|err| {
            tracing::error!(error = %err, "token issuance failed");
            AuthError::Unauthenticated
        })?;

        // 6. Record the login time. Telemetry, not an access decision;
        //    a failed write does not undo the login.
        if let Err(err) = self.users.record_login(user_id, now).await {
            tracing::warn!(error = %err, user_id = %user_id, "failed to record last login");
        }

        tracing::info!(user_id = %user_id, "login succeeded");
        Ok(LoginOutput { principal, token })
    }

    /// Exchange a still-refreshable bearer token for a fresh one.
    ///
    /// The old token only proves identity; account status, role,
    /// permissions, and company state are all re-read before the new
    /// token is issued, so a refresh never extends access the live
    /// records no longer grant.
    pub async fn refresh(&self, token: &str) -> AuthResult<LoginOutput> {
        let now = Utc::now();

        let claims = self.tokens.verify_for_refresh(token).map_err(|err| {
            tracing::debug!(error = %err, "refresh rejected");
            AuthError::Unauthenticated
        })?;

        let principal =
            resolver::principal_from_claims(&self.users, &self.companies, &claims, now).await?;

        let token = self.tokens.issue(&principal).map_err(|err| {
            tracing::error!(error = %err, "token issuance failed");
            AuthError::Unauthenticated
        })?;

        Ok(LoginOutput { principal, token })
    }

    /// Invalidate a credential.
    ///
    /// Sessions are destroyed server-side. Bearer tokens have no
    /// revocation list; the holder discards the token and it ages out
    /// at expiry. Logout is idempotent: an unknown session id is
    /// success, not an error.
    pub async fn logout(&self, credential: &Credential) -> AuthResult<()> {
        match credential {
            Credential::Session(session_id) => {
                self.sessions.destroy(session_id).await.map_err(|err| {
                    tracing::warn!(error = %err, "session destroy failed");
                    AuthError::Unauthenticated
                })?;
                tracing::info!("session destroyed");
                Ok(())
            }
            Credential::Bearer(_) => Ok(()),
        }
    }

    /// The token service this flow set signs with.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
