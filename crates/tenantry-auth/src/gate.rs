//! Tenant status gate.
//!
//! Runs on every protected request, not only at login: suspending or
//! expiring a company locks out already-issued, still-valid credentials
//! on their next use. Platform admins bypass the gate unconditionally.

use chrono::Utc;
use tenantry_core::directory::CompanyDirectory;
use tenantry_core::error::{AuthError, AuthResult};
use tenantry_core::models::principal::Principal;

pub struct TenantGate<C> {
    companies: C,
}

impl<C: CompanyDirectory> TenantGate<C> {
    pub fn new(companies: C) -> Self {
        Self { companies }
    }

    /// Reject principals whose company is not currently operable.
    ///
    /// The company record is re-read here rather than trusted from the
    /// resolved principal, so a suspension that lands mid-request-chain
    /// still takes effect.
    pub async fn check(&self, principal: &Principal) -> AuthResult<()> {
        if principal.is_platform_admin() {
            return Ok(());
        }

        let company_id = principal.company_id.ok_or(AuthError::Unauthenticated)?;

        let company = self
            .companies
            .get_by_id(company_id)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "company directory lookup failed");
                AuthError::Unauthenticated
            })?
            .ok_or(AuthError::Unauthenticated)?;

        match company.state_at(Utc::now()).suspension_reason() {
            Some(reason) => {
                tracing::info!(company_id = %company_id, reason, "tenant gate rejected request");
                Err(AuthError::suspended(reason))
            }
            None => Ok(()),
        }
    }
}
