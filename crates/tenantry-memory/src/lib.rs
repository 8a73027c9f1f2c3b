//! In-memory implementations of the `tenantry-core` directory traits.
//!
//! Backed by `Arc<RwLock<HashMap>>`; handles are cheap to clone and
//! share one store. Suitable for tests and single-process deployments,
//! not for durable multi-process state.

pub mod companies;
pub mod sessions;
pub mod users;

pub use companies::MemoryCompanyDirectory;
pub use sessions::MemorySessionStore;
pub use users::MemoryUserDirectory;
