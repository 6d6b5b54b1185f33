//! Token lifecycle module
//!
//! This module handles all token-related operations:
//! - Signing and verifying short-lived JWT access tokens
//! - Generating opaque refresh tokens from the OS random source
//! - Persisting refresh tokens by hash and validating them at lookup time

mod config;
mod generator;
mod signer;
mod store;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use generator::{TokenGenerator, OPAQUE_TOKEN_BYTES};
pub use signer::TokenSigner;
pub use store::{hash_token, SessionLookupResult, TokenStore};
