//! Registration service implementation

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::{NewUser, UserIdentity};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

/// Creates users with hashed passwords
pub struct UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    password_hasher: Arc<H>,
}

impl<U, H> UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Register a new user
    ///
    /// # Arguments
    ///
    /// * `email` - Login email; surrounding whitespace is ignored
    /// * `password` - Plaintext password, hashed before storage
    /// * `age` - Optional age
    ///
    /// # Returns
    ///
    /// * `Ok(UserIdentity)` - The created user
    /// * `Err(DomainError::Validation)` - Email or password is empty
    /// * `Err(DomainError::Conflict)` - The email is already registered
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        age: Option<i32>,
    ) -> DomainResult<UserIdentity> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation {
                message: "Invalid Email or Password".to_string(),
            });
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let user = self
            .user_repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
                age,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}
