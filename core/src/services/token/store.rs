//! Refresh token persistence and validation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::SessionIdentity;
use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Outcome of looking up a refresh token
///
/// Unknown, expired and revoked tokens are deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLookupResult {
    /// The token is active and belongs to this identity
    Valid(SessionIdentity),
    /// The token cannot be used
    Invalid,
}

impl SessionLookupResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionLookupResult::Valid(_))
    }
}

/// Hashes a raw token for storage and lookup
///
/// Unsalted SHA-256, lowercase hex.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Stores refresh tokens by hash and answers whether a raw token is active
pub struct TokenStore<T: TokenRepository> {
    repository: Arc<T>,
}

impl<T: TokenRepository> TokenStore<T> {
    /// Creates a store over the given repository
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }

    /// The underlying repository
    pub fn repository(&self) -> &Arc<T> {
        &self.repository
    }

    /// Hashes a raw token (see [`hash_token`])
    pub fn hash_token(&self, raw_token: &str) -> String {
        hash_token(raw_token)
    }

    /// Persists a refresh token for `owner`
    ///
    /// # Arguments
    ///
    /// * `owner` - The user the token is issued to
    /// * `raw_token` - The opaque token handed to the client; only its hash is stored
    /// * `expires_at` - Exclusive expiry instant
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The stored record
    /// * `Err(DomainError::Persistence)` - The write failed
    pub async fn save(
        &self,
        owner: Uuid,
        raw_token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken, DomainError> {
        let record = RefreshToken::new(owner, hash_token(raw_token), expires_at);
        let saved = self.repository.save_refresh_token(record).await?;

        debug!(user_id = %owner, token_id = %saved.id, "Refresh token stored");
        Ok(saved)
    }

    /// Looks up a raw token and checks that it is active now
    pub async fn find_active_by_raw_token(
        &self,
        raw_token: &str,
    ) -> Result<SessionLookupResult, DomainError> {
        self.find_active_by_raw_token_at(raw_token, Utc::now()).await
    }

    /// Looks up a raw token and checks that it is active at `now`
    ///
    /// A record whose `expires_at` equals `now` is invalid. Storage faults
    /// are returned as errors, never folded into `Invalid`.
    pub async fn find_active_by_raw_token_at(
        &self,
        raw_token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionLookupResult, DomainError> {
        let Some(stored) = self.repository.find_refresh_token(&hash_token(raw_token)).await? else {
            debug!("Refresh token lookup: unknown token");
            return Ok(SessionLookupResult::Invalid);
        };

        if stored.token.is_revoked {
            debug!(user_id = %stored.owner.id, token_id = %stored.token.id, "Refresh token lookup: revoked");
            return Ok(SessionLookupResult::Invalid);
        }

        if stored.token.is_expired_at(now) {
            debug!(user_id = %stored.owner.id, token_id = %stored.token.id, "Refresh token lookup: expired");
            return Ok(SessionLookupResult::Invalid);
        }

        Ok(SessionLookupResult::Valid(stored.owner))
    }
}
