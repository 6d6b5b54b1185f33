//! User route handlers
//!
//! This module contains the session endpoints:
//! - Registration
//! - Login with email and password
//! - Access token refresh
//! - Current identity lookup

pub mod login;
pub mod me;
pub mod refresh;
pub mod register;

pub use login::login;
pub use me::me;
pub use refresh::refresh;
pub use register::register;

use std::sync::Arc;

use gk_core::repositories::{TokenRepository, UserRepository};
use gk_core::services::{PasswordHasher, SessionService, UserService};

/// Application state that holds shared services
pub struct AppState<U, T, H>
where
    U: UserRepository,
    T: TokenRepository,
    H: PasswordHasher,
{
    pub session_service: Arc<SessionService<U, T, H>>,
    pub user_service: Arc<UserService<U, H>>,
}
