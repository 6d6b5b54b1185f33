//! Unit tests for refresh

use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};

use crate::errors::{AuthError, DomainError};

use super::{create_test_context, EMAIL, PASSWORD};

#[tokio::test]
async fn test_refresh_issues_access_token_for_owner() {
    let ctx = create_test_context().await;
    let session = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    let refreshed = ctx.service.refresh(&session.refresh_token).await.unwrap();

    assert_eq!(refreshed.token_type, "Bearer");
    assert_eq!(refreshed.expires_in, 900);
    let claims = ctx
        .service
        .signer()
        .verify_access_token(&refreshed.access_token)
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), session.user.id);
    assert_eq!(claims.email, EMAIL);
}

#[tokio::test]
async fn test_refresh_twice_reuses_token() {
    let ctx = create_test_context().await;
    let session = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    let first = ctx.service.refresh(&session.refresh_token).await.unwrap();
    let second = ctx.service.refresh(&session.refresh_token).await.unwrap();

    let signer = ctx.service.signer();
    let a = signer.verify_access_token(&first.access_token).unwrap();
    let b = signer.verify_access_token(&second.access_token).unwrap();
    assert_eq!(a.sub, b.sub);
    assert_eq!(ctx.tokens.len().await, 1);
}

#[tokio::test]
async fn test_refresh_later_has_later_issued_at() {
    let ctx = create_test_context().await;
    let session = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(session.refresh_token.len(), 43);
    assert!(session
        .refresh_token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    tokio::time::sleep(StdDuration::from_millis(1100)).await;

    let refreshed = ctx.service.refresh(&session.refresh_token).await.unwrap();
    let signer = ctx.service.signer();
    let original = signer.verify_access_token(&session.access_token).unwrap();
    let renewed = signer.verify_access_token(&refreshed.access_token).unwrap();

    assert!(renewed.iat > original.iat);
    assert_eq!(renewed.sub, original.sub);
}

#[tokio::test]
async fn test_refresh_garbage_token() {
    let ctx = create_test_context().await;

    let err = ctx.service.refresh("garbage-token").await.unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::InvalidSession)));
    assert!(ctx.tokens.is_empty().await);
    assert_eq!(ctx.tokens.save_attempts(), 0);
}

#[tokio::test]
async fn test_refresh_expired_token() {
    let ctx = create_test_context().await;
    let session = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    let hash = ctx.service.store().hash_token(&session.refresh_token);
    let mut stored = ctx.tokens.get(&hash).await.unwrap();
    stored.expires_at = Utc::now() - Duration::seconds(1);
    ctx.tokens.put(stored).await;

    let err = ctx.service.refresh(&session.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidSession)));
}

#[tokio::test]
async fn test_refresh_revoked_token() {
    let ctx = create_test_context().await;
    let session = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    let hash = ctx.service.store().hash_token(&session.refresh_token);
    let mut stored = ctx.tokens.get(&hash).await.unwrap();
    stored.is_revoked = true;
    ctx.tokens.put(stored).await;

    let err = ctx.service.refresh(&session.refresh_token).await.unwrap_err();
    assert_eq!(err.to_string(), AuthError::InvalidSession.to_string());
}

#[tokio::test]
async fn test_refresh_storage_fault_is_not_invalid_session() {
    let ctx = create_test_context().await;
    let session = ctx.service.login(EMAIL, PASSWORD).await.unwrap();
    ctx.tokens.set_fail_lookups(true);

    let err = ctx.service.refresh(&session.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Persistence { .. }));
}
