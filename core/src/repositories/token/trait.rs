//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, StoredRefreshToken};
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations
///
/// Rows are written once and never updated or deleted through this trait.
/// Implementations must store the record in a single write so an aborted
/// caller leaves either the full row or nothing.
///
/// # Security Considerations
/// - Only token hashes are ever passed in; raw tokens never reach storage
/// - Storage faults are reported as `DomainError::Persistence` and are not
///   retried
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::{Duration, Utc};
    /// # use uuid::Uuid;
    /// # use gk_core::repositories::TokenRepository;
    /// # use gk_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = RefreshToken::new(
    ///     Uuid::new_v4(),
    ///     "sha256_hash_of_token".to_string(),
    ///     Utc::now() + Duration::days(7),
    /// );
    ///
    /// let saved = repo.save_refresh_token(token).await?;
    /// println!("Token saved with ID: {}", saved.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value, joined with its owner
    ///
    /// Returns the record regardless of expiry or revocation; callers decide
    /// validity.
    ///
    /// # Arguments
    /// * `token_hash` - The hashed token value to search for
    ///
    /// # Returns
    /// * `Ok(Some(StoredRefreshToken))` - Token and owner found
    /// * `Ok(None)` - No token with this hash, or its owner no longer exists
    /// * `Err(DomainError)` - Database error occurred
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<StoredRefreshToken>, DomainError>;

    /// Find all refresh token records issued to a user, newest first
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Count records that are still valid for a user
    async fn count_active_user_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let tokens = self.find_by_user_id(user_id).await?;
        Ok(tokens.iter().filter(|t| t.is_valid()).count())
    }
}
