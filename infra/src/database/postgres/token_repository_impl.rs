//! PostgreSQL implementation of the TokenRepository trait.
//!
//! Refresh tokens arrive already hashed; this module never sees a raw token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use gk_core::domain::entities::token::{RefreshToken, StoredRefreshToken};
use gk_core::domain::entities::user::SessionIdentity;
use gk_core::errors::DomainError;
use gk_core::repositories::TokenRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of TokenRepository
pub struct PgTokenRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PostgreSQL token repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &PgRow) -> Result<RefreshToken, DomainError> {
        let field = |name: &str, e: sqlx::Error| DomainError::Persistence {
            message: format!("Failed to get {}: {}", name, e),
        };

        Ok(RefreshToken {
            id: row.try_get::<Uuid, _>("id").map_err(|e| field("id", e))?,
            user_id: row.try_get::<Uuid, _>("user_id").map_err(|e| field("user_id", e))?,
            token_hash: row.try_get("token_hash").map_err(|e| field("token_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| field("created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| field("expires_at", e))?,
            is_revoked: row.try_get("is_revoked").map_err(|e| field("is_revoked", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, created_at, expires_at, is_revoked
            ) VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(token.id)
            .bind(token.user_id)
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(|e| match map_sqlx_error("Failed to save refresh token", e) {
                // A colliding hash is a storage fault, not a client conflict
                DomainError::Conflict { message } => DomainError::Persistence { message },
                other => other,
            })?;

        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<StoredRefreshToken>, DomainError> {
        let query = r#"
            SELECT rt.id, rt.user_id, rt.token_hash, rt.created_at, rt.expires_at,
                   rt.is_revoked, u.email
            FROM refresh_tokens rt
            JOIN users u ON u.id = rt.user_id
            WHERE rt.token_hash = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find refresh token", e))?;

        let Some(row) = result else {
            return Ok(None);
        };

        let token = Self::row_to_token(&row)?;
        let email: String = row.try_get("email").map_err(|e| DomainError::Persistence {
            message: format!("Failed to get email: {}", e),
        })?;

        Ok(Some(StoredRefreshToken {
            owner: SessionIdentity {
                id: token.user_id,
                email,
            },
            token,
        }))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at, is_revoked
            FROM refresh_tokens
            WHERE user_id = $1
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user tokens", e))?;

        rows.iter().map(Self::row_to_token).collect()
    }
}
