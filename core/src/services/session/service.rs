//! Main session service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::token::{RefreshResult, SessionResult, TOKEN_TYPE};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::{SessionLookupResult, TokenGenerator, TokenSigner, TokenStore};

use super::config::{RotationPolicy, SessionServiceConfig};

/// Session service orchestrating login and access token renewal
///
/// Holds no per-session state of its own: everything that outlives a call
/// lives in the token store.
pub struct SessionService<U, T, H>
where
    U: UserRepository,
    T: TokenRepository,
    H: PasswordHasher,
{
    /// User lookup
    user_repository: Arc<U>,
    /// Password verification
    password_hasher: Arc<H>,
    /// Access token signing
    signer: Arc<TokenSigner>,
    /// Refresh token generation
    generator: TokenGenerator,
    /// Refresh token persistence
    store: TokenStore<T>,
    /// Service configuration
    config: SessionServiceConfig,
}

impl<U, T, H> SessionService<U, T, H>
where
    U: UserRepository,
    T: TokenRepository,
    H: PasswordHasher,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository the identity is looked up in
    /// * `token_repository` - Repository refresh tokens are persisted in
    /// * `password_hasher` - Verifies presented passwords
    /// * `signer` - Signs access tokens
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        password_hasher: Arc<H>,
        signer: Arc<TokenSigner>,
        config: SessionServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            signer,
            generator: TokenGenerator::new(),
            store: TokenStore::new(token_repository),
            config,
        }
    }

    /// The token store refresh tokens are persisted through
    pub fn store(&self) -> &TokenStore<T> {
        &self.store
    }

    /// The signer access tokens are issued with
    pub fn signer(&self) -> &Arc<TokenSigner> {
        &self.signer
    }

    /// Authenticate with email and password and issue a token pair
    ///
    /// # Arguments
    ///
    /// * `email` - Login email; surrounding whitespace is ignored
    /// * `password` - Plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(SessionResult)` - Access and refresh tokens, refresh token persisted
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// * `Err(DomainError)` - Signing, entropy or storage failure
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<SessionResult> {
        let email = email.trim();

        let Some(user) = self.user_repository.find_by_email(email).await? else {
            debug!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        match self.password_hasher.verify(password, &user.password_hash).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(user_id = %user.id, "Login rejected: password mismatch");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Login rejected: stored password hash unreadable");
                return Err(AuthError::InvalidCredentials.into());
            }
        }

        let identity = user.session_identity();
        let access_token = self.signer.issue_access_token(identity.id, &identity.email)?;
        let refresh_token = self.generator.generate_opaque_token()?;

        // The access token is only returned once the refresh token is stored
        let expires_at = Utc::now() + self.config.refresh_token_lifetime();
        self.store.save(identity.id, &refresh_token, expires_at).await?;

        info!(user_id = %identity.id, "User logged in");

        Ok(SessionResult {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.signer.access_token_lifetime().num_seconds(),
            user: identity,
        })
    }

    /// Exchange a refresh token for a new access token
    ///
    /// # Arguments
    ///
    /// * `raw_refresh_token` - The opaque token returned at login
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshResult)` - A new access token for the token's owner
    /// * `Err(AuthError::InvalidSession)` - Unknown, expired or revoked token
    /// * `Err(DomainError)` - Signing or storage failure
    pub async fn refresh(&self, raw_refresh_token: &str) -> DomainResult<RefreshResult> {
        let identity = match self.store.find_active_by_raw_token(raw_refresh_token).await? {
            SessionLookupResult::Valid(identity) => identity,
            SessionLookupResult::Invalid => return Err(AuthError::InvalidSession.into()),
        };

        let access_token = self.signer.issue_access_token(identity.id, &identity.email)?;

        match self.config.rotation_policy {
            RotationPolicy::None => {}
        }

        debug!(user_id = %identity.id, "Access token refreshed");

        Ok(RefreshResult {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.signer.access_token_lifetime().num_seconds(),
        })
    }
}

impl<U, T, H> std::fmt::Debug for SessionService<U, T, H>
where
    U: UserRepository,
    T: TokenRepository,
    H: PasswordHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("signer", &self.signer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

