//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use gk_core::domain::entities::user::{NewUser, UserIdentity};
use gk_core::errors::DomainError;
use gk_core::repositories::UserRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to UserIdentity entity
    fn row_to_user(row: &PgRow) -> Result<UserIdentity, DomainError> {
        let field = |name: &str, e: sqlx::Error| DomainError::Persistence {
            message: format!("Failed to get {}: {}", name, e),
        };

        Ok(UserIdentity {
            id: row.try_get::<Uuid, _>("id").map_err(|e| field("id", e))?,
            email: row.try_get("email").map_err(|e| field("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| field("password_hash", e))?,
            age: row.try_get("age").map_err(|e| field("age", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| field("created_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, age, created_at
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user by email", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: NewUser) -> Result<UserIdentity, DomainError> {
        let identity = user.into_identity();

        let query = r#"
            INSERT INTO users (id, email, password_hash, age, created_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(query)
            .bind(identity.id)
            .bind(&identity.email)
            .bind(&identity.password_hash)
            .bind(identity.age)
            .bind(identity.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match map_sqlx_error("Failed to create user", e) {
                DomainError::Conflict { .. } => DomainError::Conflict {
                    message: "Email already registered".to_string(),
                },
                other => other,
            })?;

        Ok(identity)
    }
}
