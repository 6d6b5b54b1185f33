//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// Credential and session failures carry no detail about which check failed;
/// persistence and cryptographic failures carry detail for server-side logs
/// only and must never be echoed to clients.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the failure is caused by the caller's input rather than by the
    /// service itself
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::Validation { .. } | DomainError::Conflict { .. } | DomainError::Auth(_) => {
                true
            }
            DomainError::Token(err) => err.is_client_error(),
            DomainError::Persistence { .. } | DomainError::Internal { .. } => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
