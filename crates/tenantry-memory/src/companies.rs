//! In-memory implementation of [`CompanyDirectory`].

use std::collections::HashMap;
use std::sync::Arc;

use tenantry_core::directory::CompanyDirectory;
use tenantry_core::error::DirectoryError;
use tenantry_core::models::company::Company;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemoryCompanyDirectory {
    companies: Arc<RwLock<HashMap<Uuid, Company>>>,
}

impl MemoryCompanyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, company: Company) {
        self.companies.write().await.insert(company.id, company);
    }

    /// Mutate a stored company in place; returns whether the id
    /// existed. Used to flip tenant status between requests.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> bool
    where
        F: FnOnce(&mut Company),
    {
        match self.companies.write().await.get_mut(&id) {
            Some(company) => {
                apply(company);
                true
            }
            None => false,
        }
    }
}

impl CompanyDirectory for MemoryCompanyDirectory {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Company>, DirectoryError> {
        Ok(self.companies.read().await.get(&id).cloned())
    }
}
