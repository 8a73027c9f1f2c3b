//! Principal model: the resolved identity for one request.
//!
//! A `Principal` exists only between authentication and the end of the
//! request that produced it; it is never persisted and never cached.
//! Role and permissions are the *live* values from the user directory,
//! not the claims embedded in whatever credential arrived (a role change
//! takes effect on the next request, not at token expiry).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::company::CompanySnapshot;
use crate::models::permission::PermissionSet;
use crate::models::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    /// `None` iff `role` is platform-admin.
    pub company_id: Option<Uuid>,
    pub email: String,
    pub role: Role,
    pub permissions: PermissionSet,
    /// Tenant lifecycle state as observed at resolution time; `None`
    /// for platform admins.
    pub company: Option<CompanySnapshot>,
}

impl Principal {
    pub fn is_platform_admin(&self) -> bool {
        self.role.is_platform_admin()
    }
}
