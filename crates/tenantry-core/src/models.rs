//! Domain models for Tenantry.
//!
//! These are the value types shared across all crates. None of them owns
//! persistence; the `User`, `Company`, and `SessionRecord` types mirror
//! what the external stores hold.

pub mod company;
pub mod permission;
pub mod principal;
pub mod role;
pub mod session;
pub mod user;
