//! Access token signing and verification

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, ACCESS_TOKEN_EXPIRY_MINUTES};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies short-lived HS256 access tokens
///
/// The signer holds the keys derived from the signing secret and nothing
/// else. It keeps no per-call state, so a single instance is shared across
/// requests behind an `Arc`.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_lifetime: Duration,
}

impl TokenSigner {
    /// Creates a new signer from an explicit configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration holding the signing secret
    pub fn new(config: &TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key,
            decoding_key,
            validation,
            access_token_lifetime: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
        }
    }

    /// Lifetime of every issued access token
    pub fn access_token_lifetime(&self) -> Duration {
        self.access_token_lifetime
    }

    /// Issues an access token for a user, valid from now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The subject of the token
    /// * `email` - The subject's email, carried as a claim
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact signed token
    /// * `Err(DomainError::Token(TokenError::Signing))` - Encoding failed
    pub fn issue_access_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        self.issue_access_token_at(user_id, email, Utc::now())
    }

    /// Issues an access token whose `iat` is `issued_at`
    pub fn issue_access_token_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = AccessClaims::new(user_id, email, issued_at, self.access_token_lifetime);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Token(TokenError::Signing {
                message: e.to_string(),
            })
        })
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT presented by the client
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - Signature is intact and `now < exp`
    /// * `Err(TokenError::AccessTokenExpired)` - Token has expired
    /// * `Err(TokenError::InvalidAccessToken)` - Any other failure
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::AccessTokenExpired),
                _ => DomainError::Token(TokenError::InvalidAccessToken),
            })?;

        // jsonwebtoken accepts exp == now; expiry here is exclusive
        if token_data.claims.is_expired_at(Utc::now()) {
            return Err(DomainError::Token(TokenError::AccessTokenExpired));
        }

        if token_data.claims.user_id().is_err() {
            return Err(DomainError::Token(TokenError::InvalidAccessToken));
        }

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &Algorithm::HS256)
            .field("access_token_lifetime", &self.access_token_lifetime)
            .finish_non_exhaustive()
    }
}
