//! Error types for authentication and token operations

use thiserror::Error;

/// Authentication-related errors
///
/// Messages are deliberately generic: they are shown to clients as-is and
/// must not reveal whether an email exists or why a session was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired session")]
    InvalidSession,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing failed: {message}")]
    Signing { message: String },

    #[error("Random source unavailable: {message}")]
    Entropy { message: String },

    #[error("Invalid access token")]
    InvalidAccessToken,

    #[error("Access token expired")]
    AccessTokenExpired,
}

impl TokenError {
    /// Signing and entropy failures are internal; verification failures are
    /// the caller's
    pub fn is_client_error(&self) -> bool {
        matches!(self, TokenError::InvalidAccessToken | TokenError::AccessTokenExpired)
    }
}
