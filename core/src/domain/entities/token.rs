//! Token entities for JWT-based session authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::SessionIdentity;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Token type reported alongside issued access tokens
pub const TOKEN_TYPE: &str = "Bearer";

/// Claims carried by a signed access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the subject at issuance
    pub email: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims issued at `issued_at` and valid for `lifetime`
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - The user's email
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - How long the token stays valid
    pub fn new(user_id: Uuid, email: &str, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat,
            exp: iat + lifetime.num_seconds(),
        }
    }

    /// Checks if the claims have expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Lifetime of the token in seconds
    pub fn lifetime_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}

/// Refresh token record stored in the database
///
/// Only the SHA-256 hash of the opaque token is kept; the raw value is handed
/// to the client once and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Hex-encoded SHA-256 hash of the raw token
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires (exclusive)
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked. Nothing in this service sets it;
    /// the column exists so a revocation flow can be added without a migration.
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new, unrevoked refresh token record
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owner's UUID
    /// * `token_hash` - The hashed token value
    /// * `expires_at` - Expiry instant
    pub fn new(user_id: Uuid, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: Utc::now(),
            expires_at,
            is_revoked: false,
        }
    }

    /// Checks if the token has expired at `now`. Expiry is exclusive: a token
    /// whose `expires_at` equals `now` is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks if the token can still be exchanged at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked && !self.is_expired_at(now)
    }

    /// Checks if the token is currently valid
    pub fn is_valid(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}

/// A refresh token record joined with its owner's public identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRefreshToken {
    pub token: RefreshToken,
    pub owner: SessionIdentity,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token (returned once, stored only as a hash)
    pub refresh_token: String,

    /// Always `Bearer`
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Public fields of the authenticated identity
    pub user: SessionIdentity,
}

/// Result of a successful refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResult {
    /// Newly signed access token
    pub access_token: String,

    /// Always `Bearer`
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}
