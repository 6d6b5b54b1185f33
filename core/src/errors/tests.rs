//! Unit tests for domain error classification

use super::*;

#[test]
fn test_credential_errors_are_client_errors() {
    assert!(DomainError::from(AuthError::InvalidCredentials).is_client_error());
    assert!(DomainError::from(AuthError::InvalidSession).is_client_error());
    assert!(DomainError::from(TokenError::AccessTokenExpired).is_client_error());
}

#[test]
fn test_internal_errors_are_not_client_errors() {
    let signing = DomainError::from(TokenError::Signing {
        message: "bad key".to_string(),
    });
    let entropy = DomainError::from(TokenError::Entropy {
        message: "no rng".to_string(),
    });
    let persistence = DomainError::Persistence {
        message: "connection reset".to_string(),
    };

    assert!(!signing.is_client_error());
    assert!(!entropy.is_client_error());
    assert!(!persistence.is_client_error());
}

#[test]
fn test_credential_messages_are_generic() {
    let message = DomainError::from(AuthError::InvalidCredentials).to_string();
    assert_eq!(message, "Invalid email or password");
    assert!(!message.to_lowercase().contains("not found"));
}

#[test]
fn test_session_message_hides_reason() {
    let message = DomainError::from(AuthError::InvalidSession).to_string();
    assert!(!message.contains("revoked"));
    assert!(!message.contains("not found"));
}
