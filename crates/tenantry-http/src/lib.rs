//! HTTP boundary for the tenantry authentication core.
//!
//! Structure:
//! - `extract.rs`: credential extraction (bearer header or cookies)
//! - `middleware.rs`: the authenticate layer (resolve + tenant gate)
//! - `respond.rs`: consistent JSON error responses
//! - `routes.rs`: login/refresh/logout/me handlers and a guarded
//!   tenant-scoped reports resource
//! - `app.rs`: application state and router assembly

pub mod app;
pub mod extract;
pub mod middleware;
pub mod respond;
pub mod routes;

pub use app::{AppState, build_app};
