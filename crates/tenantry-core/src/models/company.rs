//! Company (tenant) record model.
//!
//! A company is the unit of data isolation. This core never writes
//! company records; it reads them to decide whether the tenant is in an
//! operable state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyStatus {
    Active,
    Inactive,
}

/// Lifecycle state of a tenant at a point in time.
///
/// Derived from the raw record; `Deactivated` and `TrialExpired` produce
/// distinct suspension reasons for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenantState {
    Operable,
    Deactivated,
    TrialExpired,
}

impl TenantState {
    /// Human-readable suspension reason, `None` while operable.
    pub fn suspension_reason(&self) -> Option<&'static str> {
        match self {
            TenantState::Operable => None,
            TenantState::Deactivated => Some("company account is deactivated"),
            TenantState::TrialExpired => Some("company trial period has expired"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub status: CompanyStatus,
    /// Set while the company is on a trial plan; an elapsed trial makes
    /// the tenant inoperable even when `status` is still `Active`.
    pub trial_expires_at: Option<DateTime<Utc>>,
}

impl Company {
    pub fn state_at(&self, now: DateTime<Utc>) -> TenantState {
        self.snapshot().state_at(now)
    }

    pub fn snapshot(&self) -> CompanySnapshot {
        CompanySnapshot {
            status: self.status,
            trial_expires_at: self.trial_expires_at,
        }
    }
}

/// The slice of a company record a `Principal` carries: enough to answer
/// "was this tenant operable when the request was resolved", nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub status: CompanyStatus,
    pub trial_expires_at: Option<DateTime<Utc>>,
}

impl CompanySnapshot {
    pub fn state_at(&self, now: DateTime<Utc>) -> TenantState {
        if self.status != CompanyStatus::Active {
            return TenantState::Deactivated;
        }
        match self.trial_expires_at {
            Some(expiry) if expiry <= now => TenantState::TrialExpired,
            _ => TenantState::Operable,
        }
    }

    pub fn is_operable_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == TenantState::Operable
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;

    fn company(status: CompanyStatus, trial: Option<DateTime<Utc>>) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Acme".into(),
            status,
            trial_expires_at: trial,
        }
    }

    #[test]
    fn active_without_trial_is_operable() {
        let c = company(CompanyStatus::Active, None);
        assert_eq!(c.state_at(Utc::now()), TenantState::Operable);
    }

    #[test]
    fn inactive_is_deactivated_even_with_live_trial() {
        let c = company(CompanyStatus::Inactive, Some(Utc::now() + Duration::days(30)));
        assert_eq!(c.state_at(Utc::now()), TenantState::Deactivated);
    }

    #[test]
    fn elapsed_trial_expires_an_active_company() {
        let now = Utc::now();
        let c = company(CompanyStatus::Active, Some(now - Duration::days(1)));
        assert_eq!(c.state_at(now), TenantState::TrialExpired);
        assert!(!c.snapshot().is_operable_at(now));
    }

    #[test]
    fn future_trial_expiry_keeps_company_operable() {
        let now = Utc::now();
        let c = company(CompanyStatus::Active, Some(now + Duration::days(7)));
        assert!(c.snapshot().is_operable_at(now));
    }
}
