//! Authorization guards.
//!
//! Pure, order-independent checks over a resolved [`Principal`]. They
//! run after authentication and the tenant gate, and they only ever
//! deny with [`AuthError::Forbidden`]. The denied requirement is
//! logged here; the error shown to the caller stays generic.

use tenantry_core::error::{AuthError, AuthResult};
use tenantry_core::models::principal::Principal;
use tenantry_core::models::role::Role;
use uuid::Uuid;

/// Require the principal's role to be in the allowed set.
///
/// Platform admins get no implicit pass: a route for tenant admins
/// only must list them explicitly or keep them out.
pub fn require_role(principal: &Principal, allowed: &[Role]) -> AuthResult<()> {
    if allowed.contains(&principal.role) {
        return Ok(());
    }
    let detail = format!(
        "role {} not in allowed set {:?}",
        principal.role,
        allowed.iter().map(Role::as_str).collect::<Vec<_>>()
    );
    tracing::warn!(user_id = %principal.user_id, %detail, "role check denied");
    Err(AuthError::forbidden(detail))
}

/// Require a named permission.
///
/// Admin roles hold every permission implicitly; everyone else needs
/// an explicit grant in their permission set.
pub fn require_permission(principal: &Principal, permission: &str) -> AuthResult<()> {
    if principal.role.grants_all_permissions() || principal.permissions.allows(permission) {
        return Ok(());
    }
    let detail = format!("missing permission '{permission}'");
    tracing::warn!(user_id = %principal.user_id, %detail, "permission check denied");
    Err(AuthError::forbidden(detail))
}

/// Bind the request to an effective tenant and return it.
///
/// Tenant-scoped principals may only target their own company; naming
/// any other tenant is denied, and naming none falls back to their own.
/// Platform admins are tenant-unscoped, so they must name the target
/// tenant explicitly.
pub fn require_tenant_scope(principal: &Principal, requested: Option<Uuid>) -> AuthResult<Uuid> {
    if principal.is_platform_admin() {
        return requested.ok_or_else(|| {
            let detail = "platform admin request names no target tenant";
            tracing::warn!(user_id = %principal.user_id, detail, "tenant scope denied");
            AuthError::forbidden(detail)
        });
    }

    let bound = principal
        .company_id
        .ok_or_else(|| AuthError::forbidden("principal has no tenant binding"))?;

    match requested {
        Some(target) if target != bound => {
            let detail = format!("request targets tenant {target} outside binding {bound}");
            tracing::warn!(user_id = %principal.user_id, %detail, "tenant scope denied");
            Err(AuthError::forbidden(detail))
        }
        _ => Ok(bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenantry_core::models::permission::PermissionSet;

    fn principal(role: Role, company_id: Option<Uuid>, permissions: PermissionSet) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            company_id,
            email: "user@acme.test".into(),
            role,
            permissions,
            company: None,
        }
    }

    #[test]
    fn role_guard_checks_membership_only() {
        let manager = principal(Role::Manager, Some(Uuid::new_v4()), PermissionSet::default());
        assert!(require_role(&manager, &[Role::Manager, Role::TenantAdmin]).is_ok());
        assert!(matches!(
            require_role(&manager, &[Role::TenantAdmin]),
            Err(AuthError::Forbidden { .. })
        ));

        // No implicit pass for platform admins.
        let platform = principal(Role::PlatformAdmin, None, PermissionSet::default());
        assert!(matches!(
            require_role(&platform, &[Role::TenantAdmin]),
            Err(AuthError::Forbidden { .. })
        ));
    }

    #[test]
    fn permission_guard_requires_explicit_grant_for_non_admins() {
        let perms = PermissionSet::from([("reports.read", true), ("reports.export", false)]);
        let employee = principal(Role::Employee, Some(Uuid::new_v4()), perms);

        assert!(require_permission(&employee, "reports.read").is_ok());
        // A grant recorded as false is a denial, not an absence bug.
        assert!(require_permission(&employee, "reports.export").is_err());
        assert!(require_permission(&employee, "billing.manage").is_err());
    }

    #[test]
    fn admin_roles_hold_every_permission() {
        let tenant_admin = principal(
            Role::TenantAdmin,
            Some(Uuid::new_v4()),
            PermissionSet::default(),
        );
        let platform_admin = principal(Role::PlatformAdmin, None, PermissionSet::default());

        assert!(require_permission(&tenant_admin, "anything.at.all").is_ok());
        assert!(require_permission(&platform_admin, "anything.at.all").is_ok());
    }

    #[test]
    fn tenant_scope_binds_to_own_company() {
        let company = Uuid::new_v4();
        // Every tenant-scoped role is confined the same way.
        for role in [Role::TenantAdmin, Role::Manager, Role::Employee] {
            let member = principal(role, Some(company), PermissionSet::default());

            assert_eq!(require_tenant_scope(&member, None), Ok(company));
            assert_eq!(require_tenant_scope(&member, Some(company)), Ok(company));
            assert!(matches!(
                require_tenant_scope(&member, Some(Uuid::new_v4())),
                Err(AuthError::Forbidden { .. })
            ));
        }
    }

    #[test]
    fn platform_admin_must_name_a_target_tenant() {
        let platform = principal(Role::PlatformAdmin, None, PermissionSet::default());
        let target = Uuid::new_v4();

        assert_eq!(require_tenant_scope(&platform, Some(target)), Ok(target));
        assert!(matches!(
            require_tenant_scope(&platform, None),
            Err(AuthError::Forbidden { .. })
        ));
    }

    #[test]
    fn forbidden_detail_stays_out_of_the_public_message() {
        let employee = principal(
            Role::Employee,
            Some(Uuid::new_v4()),
            PermissionSet::default(),
        );
        let err = require_permission(&employee, "billing.manage").unwrap_err();

        assert_eq!(err.to_string(), "insufficient permissions");
        match err {
            AuthError::Forbidden { detail } => assert!(detail.contains("billing.manage")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
