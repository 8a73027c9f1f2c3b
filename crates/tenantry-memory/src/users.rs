//! In-memory implementation of [`UserDirectory`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tenantry_core::directory::UserDirectory;
use tenantry_core::error::DirectoryError;
use tenantry_core::models::user::User;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemoryUserDirectory {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Mutate a stored user in place; returns whether the id existed.
    ///
    /// This is how tests simulate live directory edits (role changes,
    /// suspensions) between requests.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> bool
    where
        F: FnOnce(&mut User),
    {
        match self.users.write().await.get_mut(&id) {
            Some(user) => {
                apply(user);
                true
            }
            None => false,
        }
    }
}

impl UserDirectory for MemoryUserDirectory {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_email(
        &self,
        email: &str,
        company_id: Option<Uuid>,
    ) -> Result<Option<User>, DirectoryError> {
        let users = self.users.read().await;
        let found = users
            .values()
            .find(|user| {
                user.email.eq_ignore_ascii_case(email)
                    && company_id.is_none_or(|id| user.company_id == Some(id))
            })
            .cloned();
        Ok(found)
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), DirectoryError> {
        if let Some(user) = self.users.write().await.get_mut(&id) {
            user.last_login_at = Some(at);
        }
        Ok(())
    }
}
