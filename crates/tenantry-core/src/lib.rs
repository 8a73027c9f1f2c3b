//! Tenantry Core: domain models, the shared error taxonomy, and the
//! directory traits that abstract the external user/company/session
//! stores.
//!
//! This crate is deliberately free of I/O, crypto, and HTTP: everything
//! here is either a plain value type or an async trait seam.

pub mod directory;
pub mod error;
pub mod models;
