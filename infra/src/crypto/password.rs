//! bcrypt implementation of the PasswordHasher trait

use async_trait::async_trait;
use tokio::task;

use gk_core::errors::DomainError;
use gk_core::services::PasswordHasher;

/// bcrypt password hasher
///
/// Hashing and verification run on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Hasher with bcrypt's default cost
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Hasher with an explicit cost factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn join_error(e: task::JoinError) -> DomainError {
    DomainError::Internal {
        message: format!("Password hashing task failed: {}", e),
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, DomainError> {
        let plain = plain.to_owned();
        let cost = self.cost;

        task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(join_error)?
            .map_err(|e| DomainError::Internal {
                message: format!("Password couldn't be hashed: {}", e),
            })
    }

    async fn verify(&self, plain: &str, stored_hash: &str) -> Result<bool, DomainError> {
        let plain = plain.to_owned();
        let stored_hash = stored_hash.to_owned();

        task::spawn_blocking(move || bcrypt::verify(plain, &stored_hash))
            .await
            .map_err(join_error)?
            .map_err(|e| DomainError::Internal {
                message: format!("Stored password hash unreadable: {}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::with_cost(4)
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash("s3cret").await.unwrap();

        assert!(hash.starts_with("$2"));
        assert_ne!(hash, "s3cret");
        assert!(hasher.verify("s3cret", &hash).await.unwrap());
        assert!(!hasher.verify("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = fast_hasher();
        let a = hasher.hash("same").await.unwrap();
        let b = hasher.hash("same").await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_unreadable_hash() {
        let result = fast_hasher().verify("s3cret", "not-a-bcrypt-hash").await;

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
