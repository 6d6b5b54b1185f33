//! User identity entities.
//!
//! Users are owned by the user-management collaborator; the session core only
//! reads them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record as seen by the session core
#[derive(Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email, unique per user
    pub email: String,

    /// Password hash produced by the configured `PasswordHasher`
    pub password_hash: String,

    /// Optional age supplied at registration
    pub age: Option<i32>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Public subset embedded in tokens and responses
    pub fn session_identity(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

impl fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserIdentity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("age", &self.age)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Public fields of an identity: what tokens carry and clients see
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: Uuid,
    pub email: String,
}

/// Data required to create a user
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
}

impl NewUser {
    /// Builds the stored record with a fresh id
    pub fn into_identity(self) -> UserIdentity {
        UserIdentity {
            id: Uuid::new_v4(),
            email: self.email,
            password_hash: self.password_hash,
            age: self.age,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_identity_subset() {
        let user = NewUser {
            email: "a@x.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            age: Some(30),
        }
        .into_identity();

        let identity = user.session_identity();
        assert_eq!(identity.id, user.id);
        assert_eq!(identity.email, "a@x.com");
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = NewUser {
            email: "a@x.com".to_string(),
            password_hash: "$2b$04$secrethash".to_string(),
            age: None,
        }
        .into_identity();

        assert!(!format!("{:?}", user).contains("secrethash"));
    }
}
