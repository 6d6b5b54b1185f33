//! Shared setup for the HTTP integration tests

use std::sync::Arc;

use actix_web::web;

use gk_api::routes::user::AppState;
use gk_core::repositories::{MockTokenRepository, MockUserRepository};
use gk_core::services::{
    MockPasswordHasher, SessionService, SessionServiceConfig, TokenServiceConfig, TokenSigner,
    UserService,
};

pub const TEST_SECRET: &str = "integration_test_secret_0123456789";

pub type TestState = AppState<MockUserRepository, MockTokenRepository, MockPasswordHasher>;

pub struct TestApp {
    pub state: web::Data<TestState>,
    pub tokens: Arc<MockTokenRepository>,
    pub signer: Arc<TokenSigner>,
}

/// Application state wired to in-memory repositories
pub fn test_state() -> TestApp {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockTokenRepository::with_users(&users));
    let hasher = Arc::new(MockPasswordHasher::new());
    let signer = Arc::new(TokenSigner::new(&TokenServiceConfig::new(TEST_SECRET)));

    let session_service = Arc::new(SessionService::new(
        users.clone(),
        tokens.clone(),
        hasher.clone(),
        signer.clone(),
        SessionServiceConfig::default(),
    ));
    let user_service = Arc::new(UserService::new(users, hasher));

    TestApp {
        state: web::Data::new(AppState {
            session_service,
            user_service,
        }),
        tokens,
        signer,
    }
}
