//! Business services containing domain logic and use cases.

pub mod password;
pub mod session;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use password::PasswordHasher;
pub use session::{RotationPolicy, SessionService, SessionServiceConfig};
pub use token::{
    hash_token, SessionLookupResult, TokenGenerator, TokenServiceConfig, TokenSigner, TokenStore,
};
pub use user::UserService;

#[cfg(any(test, feature = "mock"))]
pub use password::MockPasswordHasher;
