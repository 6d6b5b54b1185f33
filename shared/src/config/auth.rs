//! Authentication configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{parse_var, ConfigError};

/// JWT signing configuration
///
/// The secret is never serialized and is redacted from `Debug` output.
/// Access tokens always live for fifteen minutes, so only the refresh token
/// lifetime is configurable.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify access tokens
    #[serde(skip_serializing)]
    pub secret: String,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and the default refresh lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            refresh_token_expiry: 604800, // 7 days
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` is mandatory: there is no development fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&|key| std::env::var(key).ok())
    }

    /// Create through an arbitrary variable lookup
    pub fn from_vars(vars: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = vars("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingVar { name: "JWT_SECRET" })?;
        let refresh_token_expiry = parse_var(vars, "JWT_REFRESH_TOKEN_EXPIRY", 604800)?;

        if refresh_token_expiry <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "JWT_REFRESH_TOKEN_EXPIRY",
                value: refresh_token_expiry.to_string(),
            });
        }

        Ok(Self {
            jwt: JwtConfig {
                secret,
                refresh_token_expiry,
            },
        })
    }
}
