//! # Infrastructure Layer
//!
//! Concrete implementations of the interfaces the session core depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: PostgreSQL connection pool, embedded migrations, and the
//!   user and refresh token repositories using SQLx
//! - **Crypto**: bcrypt password hashing run off the async executor

// Re-export core types for convenience
pub use gk_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Password hashing implementations
pub mod crypto;

pub use crypto::BcryptPasswordHasher;
pub use database::{DatabasePool, PgTokenRepository, PgUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
