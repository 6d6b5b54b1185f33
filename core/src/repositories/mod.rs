//! Repository interfaces the core persists through.
//!
//! Concrete SQL implementations live in the infrastructure crate; in-memory
//! implementations for tests are available under the `mock` feature.

pub mod token;
pub mod user;

pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock"))]
pub use token::MockTokenRepository;
#[cfg(any(test, feature = "mock"))]
pub use user::MockUserRepository;
