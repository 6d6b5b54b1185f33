//! Unit tests for refresh token storage and lookup

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, UserIdentity};
use crate::errors::DomainError;
use crate::repositories::{MockTokenRepository, MockUserRepository, UserRepository};
use crate::services::token::{hash_token, SessionLookupResult, TokenStore};

async fn create_test_store() -> (UserIdentity, Arc<MockTokenRepository>, TokenStore<MockTokenRepository>) {
    let users = MockUserRepository::new();
    let user = users
        .create(NewUser {
            email: "owner@x.com".to_string(),
            password_hash: "hash".to_string(),
            age: None,
        })
        .await
        .unwrap();
    let repo = Arc::new(MockTokenRepository::with_users(&users));
    let store = TokenStore::new(Arc::clone(&repo));
    (user, repo, store)
}

#[test]
fn test_hash_token_is_hex_sha256() {
    // SHA-256("abc")
    assert_eq!(
        hash_token("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(hash_token("abc"), hash_token("abc"));
    assert_ne!(hash_token("abc"), hash_token("abd"));
}

#[tokio::test]
async fn test_save_stores_only_hash() {
    let (user, repo, store) = create_test_store().await;
    let raw = "raw-refresh-token";

    let saved = store
        .save(user.id, raw, Utc::now() + Duration::days(7))
        .await
        .unwrap();

    assert_eq!(saved.token_hash, store.hash_token(raw));
    assert_ne!(saved.token_hash, raw);
    assert!(!saved.is_revoked);
    assert!(repo.get(raw).await.is_none());
    assert!(repo.get(&hash_token(raw)).await.is_some());
}

#[tokio::test]
async fn test_find_active_token() {
    let (user, _, store) = create_test_store().await;
    store
        .save(user.id, "raw", Utc::now() + Duration::days(7))
        .await
        .unwrap();

    let result = store.find_active_by_raw_token("raw").await.unwrap();
    assert_eq!(result, SessionLookupResult::Valid(user.session_identity()));
    assert!(result.is_valid());
}

#[tokio::test]
async fn test_find_unknown_token_is_invalid() {
    let (_, _, store) = create_test_store().await;

    let result = store.find_active_by_raw_token("never-issued").await.unwrap();
    assert_eq!(result, SessionLookupResult::Invalid);
}

#[tokio::test]
async fn test_expiry_is_exclusive() {
    let (user, _, store) = create_test_store().await;
    let expires_at = Utc::now() + Duration::hours(1);
    store.save(user.id, "raw", expires_at).await.unwrap();

    let before = store
        .find_active_by_raw_token_at("raw", expires_at - Duration::milliseconds(1))
        .await
        .unwrap();
    let at = store.find_active_by_raw_token_at("raw", expires_at).await.unwrap();
    let after = store
        .find_active_by_raw_token_at("raw", expires_at + Duration::seconds(1))
        .await
        .unwrap();

    assert!(before.is_valid());
    assert_eq!(at, SessionLookupResult::Invalid);
    assert_eq!(after, SessionLookupResult::Invalid);
}

#[tokio::test]
async fn test_revoked_token_is_invalid() {
    let (user, repo, store) = create_test_store().await;
    let mut saved = store
        .save(user.id, "raw", Utc::now() + Duration::days(7))
        .await
        .unwrap();
    saved.is_revoked = true;
    repo.put(saved).await;

    let result = store.find_active_by_raw_token("raw").await.unwrap();
    assert_eq!(result, SessionLookupResult::Invalid);
}

#[tokio::test]
async fn test_token_of_unknown_owner_is_invalid() {
    let (_, _, store) = create_test_store().await;
    store
        .save(Uuid::new_v4(), "orphan", Utc::now() + Duration::days(7))
        .await
        .unwrap();

    let result = store.find_active_by_raw_token("orphan").await.unwrap();
    assert_eq!(result, SessionLookupResult::Invalid);
}

#[tokio::test]
async fn test_storage_faults_propagate() {
    let (user, repo, store) = create_test_store().await;

    repo.set_fail_saves(true);
    let save = store.save(user.id, "raw", Utc::now() + Duration::days(7)).await;
    assert!(matches!(save.unwrap_err(), DomainError::Persistence { .. }));

    repo.set_fail_lookups(true);
    let lookup = store.find_active_by_raw_token("raw").await;
    assert!(matches!(lookup.unwrap_err(), DomainError::Persistence { .. }));
}
