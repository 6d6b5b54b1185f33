//! # Gatekeep Core
//!
//! Core business logic and domain layer for the Gatekeep session service.
//! This crate contains the token lifecycle (signing, opaque token generation,
//! refresh token storage), the session and registration services, the
//! repository interfaces they persist through, and the domain error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::*;
pub use errors::*;
pub use repositories::{TokenRepository, UserRepository};
pub use services::{
    PasswordHasher, RotationPolicy, SessionLookupResult, SessionService, SessionServiceConfig,
    TokenGenerator, TokenServiceConfig, TokenSigner, TokenStore, UserService,
};
