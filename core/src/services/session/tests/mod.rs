mod login_tests;
mod refresh_tests;

use std::sync::Arc;

use crate::domain::entities::user::NewUser;
use crate::repositories::{MockTokenRepository, MockUserRepository, UserRepository};
use crate::services::password::{MockPasswordHasher, PasswordHasher};
use crate::services::session::{SessionService, SessionServiceConfig};
use crate::services::token::{TokenServiceConfig, TokenSigner};

pub(super) const TEST_SECRET: &str = "session_test_secret_0123456789";
pub(super) const EMAIL: &str = "alice@example.com";
pub(super) const PASSWORD: &str = "correct horse battery staple";

pub(super) type TestService = SessionService<MockUserRepository, MockTokenRepository, MockPasswordHasher>;

pub(super) struct TestContext {
    pub service: TestService,
    pub users: MockUserRepository,
    pub tokens: Arc<MockTokenRepository>,
}

/// Session service over in-memory repositories with one registered user
pub(super) async fn create_test_context() -> TestContext {
    let users = MockUserRepository::new();
    let hasher = MockPasswordHasher::new();
    users
        .create(NewUser {
            email: EMAIL.to_string(),
            password_hash: hasher.hash(PASSWORD).await.unwrap(),
            age: Some(30),
        })
        .await
        .unwrap();

    let tokens = Arc::new(MockTokenRepository::with_users(&users));
    let signer = Arc::new(TokenSigner::new(&TokenServiceConfig::new(TEST_SECRET)));
    let service = SessionService::new(
        Arc::new(users.clone()),
        Arc::clone(&tokens),
        Arc::new(hasher),
        signer,
        SessionServiceConfig::default(),
    );

    TestContext {
        service,
        users,
        tokens,
    }
}
