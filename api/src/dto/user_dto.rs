use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// bcrypt ignores input past this many bytes
const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom = "validate_password_bytes")]
    pub password: String,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i32>,
}

impl RegisterRequest {
    /// Trim the email the same way login does, before validation
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self
    }
}

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.len() > MAX_PASSWORD_BYTES {
        let mut error = ValidationError::new("length");
        error.message = Some("Password must be 1 to 72 bytes".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: Uuid,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
