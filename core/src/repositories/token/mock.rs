//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, StoredRefreshToken};
use crate::domain::entities::user::UserIdentity;
use crate::errors::DomainError;
use crate::repositories::user::MockUserRepository;

use super::trait_::TokenRepository;

/// Mock token repository for testing
///
/// Lookups join against the user table of the `MockUserRepository` it was
/// built from, mirroring the SQL implementation's `JOIN users`.
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
    users: Arc<RwLock<HashMap<Uuid, UserIdentity>>>,
    fail_saves: AtomicBool,
    fail_lookups: AtomicBool,
    save_attempts: AtomicUsize,
}

impl MockTokenRepository {
    /// Create a new mock repository with an empty, private user table
    pub fn new() -> Self {
        Self::with_users(&MockUserRepository::new())
    }

    /// Create a mock repository whose lookups resolve owners from `users`
    pub fn with_users(users: &MockUserRepository) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            users: users.table(),
            fail_saves: AtomicBool::new(false),
            fail_lookups: AtomicBool::new(false),
            save_attempts: AtomicUsize::new(0),
        }
    }

    /// Make subsequent saves fail with a persistence error
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent lookups fail with a persistence error
    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether no record is stored
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }

    /// Number of save calls, successful or not
    pub fn save_attempts(&self) -> usize {
        self.save_attempts.load(Ordering::SeqCst)
    }

    /// Direct access to a stored record by hash
    pub async fn get(&self, token_hash: &str) -> Option<RefreshToken> {
        self.tokens.read().await.get(token_hash).cloned()
    }

    /// Overwrite a stored record, e.g. to age or revoke it in a test
    pub async fn put(&self, token: RefreshToken) {
        self.tokens.write().await.insert(token.token_hash.clone(), token);
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence {
                message: "simulated storage failure".to_string(),
            });
        }

        let mut tokens = self.tokens.write().await;

        // Check for duplicate
        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Persistence {
                message: "duplicate token hash".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<StoredRefreshToken>, DomainError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence {
                message: "simulated storage failure".to_string(),
            });
        }

        let tokens = self.tokens.read().await;
        let Some(token) = tokens.get(token_hash) else {
            return Ok(None);
        };

        let users = self.users.read().await;
        Ok(users.get(&token.user_id).map(|owner| StoredRefreshToken {
            token: token.clone(),
            owner: owner.session_identity(),
        }))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        let mut owned: Vec<RefreshToken> = tokens
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
