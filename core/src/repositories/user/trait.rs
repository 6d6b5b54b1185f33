//! User repository trait defining the interface the session core reads users
//! through.
//!
//! User storage belongs to the user-management collaborator. The core only
//! needs lookup by email at login and creation at registration.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, UserIdentity};
use crate::errors::DomainError;

/// Repository trait for user identity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use gk_core::repositories::UserRepository;
/// use gk_core::domain::entities::user::{NewUser, UserIdentity};
/// use gk_core::errors::DomainError;
///
/// struct PgUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PgUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn create(&self, user: NewUser) -> Result<UserIdentity, DomainError> {
///         Ok(user.into_identity())
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login email
    ///
    /// # Arguments
    /// * `email` - Email exactly as the user registered it
    ///
    /// # Returns
    /// * `Ok(Some(UserIdentity))` - User found
    /// * `Ok(None)` - No user with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(UserIdentity)` - The stored user with its generated id
    /// * `Err(DomainError::Conflict)` - The email is already registered
    /// * `Err(DomainError)` - Database error occurred
    async fn create(&self, user: NewUser) -> Result<UserIdentity, DomainError>;
}
