//! Session lifecycle module
//!
//! Login issues an access/refresh token pair; refresh exchanges a stored
//! refresh token for a new access token.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{RotationPolicy, SessionServiceConfig};
pub use service::SessionService;
