//! Configuration for the session service

use chrono::Duration;
use gk_shared::config::JwtConfig;

use crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS;

/// What happens to a refresh token when it is exchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// The token stays valid until its original expiry and may be reused
    #[default]
    None,
}

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_seconds: i64,
    /// Refresh token rotation behavior
    pub rotation_policy: RotationPolicy,
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self {
            refresh_token_expiry_seconds: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
            rotation_policy: RotationPolicy::None,
        }
    }
}

impl SessionServiceConfig {
    /// Lifetime given to every new refresh token
    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry_seconds)
    }
}

impl From<&JwtConfig> for SessionServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            refresh_token_expiry_seconds: jwt.refresh_token_expiry,
            ..Self::default()
        }
    }
}
