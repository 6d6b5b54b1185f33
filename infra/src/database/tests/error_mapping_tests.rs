//! Unit tests for SQLx error mapping

use gk_core::errors::DomainError;

use crate::database::postgres::map_sqlx_error;

#[test]
fn test_non_database_errors_are_persistence() {
    let err = map_sqlx_error("Failed to find user by email", sqlx::Error::PoolTimedOut);

    match err {
        DomainError::Persistence { message } => {
            assert!(message.starts_with("Failed to find user by email"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_row_not_found_is_persistence() {
    let err = map_sqlx_error("Failed to save refresh token", sqlx::Error::RowNotFound);

    assert!(matches!(err, DomainError::Persistence { .. }));
    assert!(!err.is_client_error());
}
