//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Embedded migrations
//! - Repository pattern implementations

pub mod connection;
pub mod postgres;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use postgres::{PgTokenRepository, PgUserRepository};
