//! Tenantry Auth
//!
//! Credential verification, token issuance and validation, and the
//! per-request authentication/authorization pipeline:
//!
//! - [`password`]: Argon2id hashing and verification
//! - [`token`]: signed bearer tokens (HS256) with issue/verify/refresh
//! - [`resolver`]: raw credential to [`tenantry_core::models::principal::Principal`]
//! - [`gate`]: per-request tenant operability gate
//! - [`guard`]: role, permission, and tenant-scope guards
//! - [`flows`]: login, refresh, and logout orchestration
//!
//! Everything here is generic over the directory traits in
//! `tenantry-core`; no storage backend is assumed.

pub mod config;
pub mod flows;
pub mod gate;
pub mod guard;
pub mod password;
pub mod resolver;
pub mod token;

pub use config::AuthConfig;
pub use flows::{AuthFlows, LoginInput, LoginOutput};
pub use gate::TenantGate;
pub use resolver::{Credential, Resolver};
pub use token::{Claims, TokenError, TokenService};
