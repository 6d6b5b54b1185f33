//! Shared configuration and response types for the Gatekeep server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
