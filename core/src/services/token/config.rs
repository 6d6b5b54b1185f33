//! Configuration for the token services

use std::fmt;

use gk_shared::config::JwtConfig;

/// Configuration for the token services
///
/// Built once at startup and passed to `TokenSigner::new`; nothing in the
/// token services reads the process environment. The access token lifetime
/// is not configurable and always equals `ACCESS_TOKEN_EXPIRY_MINUTES`.
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
}

impl TokenServiceConfig {
    /// Configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self::new(jwt.secret.clone())
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}
