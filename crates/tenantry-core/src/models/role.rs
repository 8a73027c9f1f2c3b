//! Role model.
//!
//! Roles form a closed set: there is no tenant-defined custom role at
//! this layer. A role travels inside tokens (kebab-case strings) and on
//! the live `User` record; the two must agree for a request to pass.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Operates across all tenants; the only role with no bound company.
    PlatformAdmin,
    /// Full control within one company.
    TenantAdmin,
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PlatformAdmin => "platform-admin",
            Role::TenantAdmin => "tenant-admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn is_platform_admin(&self) -> bool {
        matches!(self, Role::PlatformAdmin)
    }

    /// Admin roles hold every permission implicitly; the permission set
    /// is only consulted for the remaining roles.
    pub fn grants_all_permissions(&self) -> bool {
        matches!(self, Role::PlatformAdmin | Role::TenantAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platform-admin" => Ok(Role::PlatformAdmin),
            "tenant-admin" => Ok(Role::TenantAdmin),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
