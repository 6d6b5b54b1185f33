//! Password hashing collaborator interface

use async_trait::async_trait;

use crate::errors::DomainError;

/// Hashes and verifies user passwords
///
/// Implementations are expected to be slow by construction (bcrypt, argon2)
/// and must not block the async executor while they work.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    async fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - The password matches
    /// * `Ok(false)` - The password does not match
    /// * `Err(DomainError)` - The stored hash is unreadable or hashing failed
    async fn verify(&self, plain: &str, stored_hash: &str) -> Result<bool, DomainError>;
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockPasswordHasher;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use super::*;

    const PREFIX: &str = "mock$";

    /// Reversible stand-in for a real hasher, for tests only
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MockPasswordHasher;

    impl MockPasswordHasher {
        pub fn new() -> Self {
            Self
        }
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash(&self, plain: &str) -> Result<String, DomainError> {
            Ok(format!("{PREFIX}{plain}"))
        }

        async fn verify(&self, plain: &str, stored_hash: &str) -> Result<bool, DomainError> {
            match stored_hash.strip_prefix(PREFIX) {
                Some(expected) => Ok(expected == plain),
                None => Err(DomainError::Internal {
                    message: "unrecognized password hash format".to_string(),
                }),
            }
        }
    }
}
