//! Unit tests for login

use std::collections::HashSet;

use chrono::Utc;

use crate::domain::entities::user::NewUser;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::SessionLookupResult;

use super::{create_test_context, EMAIL, PASSWORD};

#[tokio::test]
async fn test_login_issues_verifiable_pair() {
    let ctx = create_test_context().await;

    let result = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(result.token_type, "Bearer");
    assert_eq!(result.expires_in, 900);
    assert_eq!(result.user.email, EMAIL);

    let claims = ctx.service.signer().verify_access_token(&result.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), result.user.id);
    assert_eq!(claims.email, EMAIL);
    assert_eq!(claims.exp - claims.iat, 900);

    let lookup = ctx
        .service
        .store()
        .find_active_by_raw_token(&result.refresh_token)
        .await
        .unwrap();
    assert_eq!(lookup, SessionLookupResult::Valid(result.user.clone()));
}

#[tokio::test]
async fn test_login_persists_hash_with_seven_day_expiry() {
    let ctx = create_test_context().await;
    let before = Utc::now();

    let result = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(result.refresh_token.len(), 43);
    assert!(ctx.tokens.get(&result.refresh_token).await.is_none());

    let hash = ctx.service.store().hash_token(&result.refresh_token);
    let stored = ctx.tokens.get(&hash).await.unwrap();
    assert_eq!(stored.user_id, result.user.id);
    assert!(!stored.is_revoked);

    let lifetime = stored.expires_at - before;
    assert!(lifetime >= chrono::Duration::days(7));
    assert!(lifetime < chrono::Duration::days(7) + chrono::Duration::minutes(1));
}

#[tokio::test]
async fn test_login_trims_email() {
    let ctx = create_test_context().await;

    let result = ctx.service.login("  alice@example.com ", PASSWORD).await.unwrap();
    assert_eq!(result.user.email, EMAIL);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let ctx = create_test_context().await;

    let wrong_password = ctx.service.login(EMAIL, "wrong").await.unwrap_err();
    let unknown_email = ctx.service.login("nobody@example.com", PASSWORD).await.unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert!(ctx.tokens.is_empty().await);
}

#[tokio::test]
async fn test_unreadable_stored_hash_is_invalid_credentials() {
    let ctx = create_test_context().await;
    ctx.users
        .create(NewUser {
            email: "legacy@example.com".to_string(),
            password_hash: "not-a-hash".to_string(),
            age: None,
        })
        .await
        .unwrap();

    let err = ctx.service.login("legacy@example.com", PASSWORD).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_fails_when_refresh_token_cannot_be_stored() {
    let ctx = create_test_context().await;
    ctx.tokens.set_fail_saves(true);

    let err = ctx.service.login(EMAIL, PASSWORD).await.unwrap_err();

    assert!(matches!(err, DomainError::Persistence { .. }));
    assert_eq!(ctx.tokens.save_attempts(), 1);
    assert!(ctx.tokens.is_empty().await);
}

#[tokio::test]
async fn test_concurrent_logins_issue_independent_tokens() {
    let ctx = create_test_context().await;

    let (first, second) = tokio::join!(
        ctx.service.login(EMAIL, PASSWORD),
        ctx.service.login(EMAIL, PASSWORD)
    );
    let first = first.unwrap();
    let second = second.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(ctx.tokens.len().await, 2);

    let owned = ctx.tokens.find_by_user_id(first.user.id).await.unwrap();
    let hashes: HashSet<String> = owned.into_iter().map(|t| t.token_hash).collect();
    assert_eq!(hashes.len(), 2);
    assert_eq!(
        ctx.tokens.count_active_user_tokens(first.user.id).await.unwrap(),
        2
    );

    for raw in [&first.refresh_token, &second.refresh_token] {
        assert!(ctx.service.refresh(raw).await.is_ok());
    }
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let ctx = create_test_context().await;
    let result = ctx.service.login(EMAIL, PASSWORD).await.unwrap();

    let verified = ctx.service.signer().verify_access_token(&result.refresh_token);
    assert!(matches!(
        verified.unwrap_err(),
        DomainError::Token(TokenError::InvalidAccessToken)
    ));
}
