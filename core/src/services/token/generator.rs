//! Opaque refresh token generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::errors::{DomainError, TokenError};

/// Number of random bytes behind each opaque token
pub const OPAQUE_TOKEN_BYTES: usize = 32;

/// Produces unguessable refresh token strings
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a token from the operating system's random source
    ///
    /// 32 random bytes, unpadded URL-safe base64 encoded (43 characters).
    /// Fails with `TokenError::Entropy` when the OS source is unavailable;
    /// there is no fallback to a weaker generator.
    pub fn generate_opaque_token(&self) -> Result<String, DomainError> {
        self.generate_with(&mut OsRng)
    }

    /// Generates a token from an injected cryptographic random source
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<String, DomainError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; OPAQUE_TOKEN_BYTES];
        rng.try_fill_bytes(&mut bytes).map_err(|e| {
            DomainError::Token(TokenError::Entropy {
                message: e.to_string(),
            })
        })?;

        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}
