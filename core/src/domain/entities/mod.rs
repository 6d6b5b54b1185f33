//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{
    AccessClaims, RefreshResult, RefreshToken, SessionResult, StoredRefreshToken,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS, TOKEN_TYPE,
};
pub use user::{NewUser, SessionIdentity, UserIdentity};
