//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, UserIdentity};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
///
/// Cloning shares the underlying table, which lets a `MockTokenRepository`
/// join refresh tokens with their owners.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, UserIdentity>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Shared handle to the user table
    pub(crate) fn table(&self) -> Arc<RwLock<HashMap<Uuid, UserIdentity>>> {
        Arc::clone(&self.users)
    }

    /// Insert a fully formed user, bypassing duplicate checks
    pub async fn insert(&self, user: UserIdentity) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<UserIdentity, DomainError> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: "Email already registered".to_string(),
            });
        }

        let identity = user.into_identity();
        users.insert(identity.id, identity.clone());
        Ok(identity)
    }
}
