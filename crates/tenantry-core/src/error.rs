//! Error types shared across the Tenantry system.

use thiserror::Error;

/// The failure taxonomy every stage of the authentication/authorization
/// pipeline reports through.
///
/// Variants are deliberately coarse on the outside: `Unauthenticated`
/// covers missing, invalid, and expired credentials as well as unknown or
/// non-active accounts, so a caller cannot distinguish "wrong password"
/// from "no such account". `Forbidden` carries the missing requirement for
/// logging, but its `Display` output stays generic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No usable credential, or the credential did not resolve to an
    /// active account.
    #[error("authentication required")]
    Unauthenticated,

    /// The account is valid but its company is not in an operable state.
    /// The reason is caller-visible (operationally necessary).
    #[error("tenant suspended: {reason}")]
    TenantSuspended { reason: String },

    /// The authenticated principal lacks a required role, permission, or
    /// tenant scope. `detail` names what was missing; it is logged, never
    /// shown to the caller.
    #[error("insufficient permissions")]
    Forbidden { detail: String },

    /// The submitted credential is structurally invalid (bad scheme,
    /// non-UTF-8 header, empty token).
    #[error("malformed credentials")]
    Malformed,
}

impl AuthError {
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden {
            detail: detail.into(),
        }
    }

    pub fn suspended(reason: impl Into<String>) -> Self {
        Self::TenantSuspended {
            reason: reason.into(),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Infrastructure failure reported by a directory implementation.
///
/// Absence of a record is not an error (the traits return `Option`);
/// this type exists for the unreachable-store and timeout cases, which
/// the pipeline always folds into `AuthError::Unauthenticated`: the
/// system fails closed, never open.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    #[error("directory lookup timed out")]
    Timeout,
}
