use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
///
/// Absent rows are `Ok(None)`, never an error; store-level faults are
/// raised as `Err`. Uniqueness of ids is enforced by the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in the store
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Persist a new user; `false` means the store refused the record
    async fn create(&self, user: &User) -> UserResult<bool>;

    /// Delete a user by ID; `false` means no such user existed
    async fn delete_by_id(&self, id: Uuid) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        // Stable order for callers; v7 ids sort by creation time
        result.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(result)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: &User) -> UserResult<bool> {
        if user.validate().is_err() {
            return Ok(false);
        }

        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Ok(false);
        }

        users.insert(user.id, user.clone());
        Ok(true)
    }

    async fn delete_by_id(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}
