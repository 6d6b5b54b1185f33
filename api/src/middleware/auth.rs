//! Access token authentication for protected endpoints.
//!
//! `AuthenticatedUser` is an extractor: adding it to a handler's arguments
//! requires a valid `Authorization: Bearer <token>` header, verified with
//! the `TokenSigner` registered as app data.

use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::InternalError, http::header::AUTHORIZATION, http::StatusCode, web,
    FromRequest, HttpRequest,
};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use gk_core::domain::entities::token::AccessClaims;
use gk_core::errors::{DomainError, TokenError};
use gk_core::services::TokenSigner;
use gk_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::handle_domain_error;

/// Identity proven by a verified access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID from the `sub` claim
    pub user_id: Uuid,
    /// Email from the token
    pub email: String,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    fn from_claims(claims: AccessClaims) -> Result<Self, DomainError> {
        let invalid = || DomainError::Token(TokenError::InvalidAccessToken);
        Ok(Self {
            user_id: claims.user_id().map_err(|_| invalid())?,
            email: claims.email,
            issued_at: Utc.timestamp_opt(claims.iat, 0).single().ok_or_else(invalid)?,
            expires_at: Utc.timestamp_opt(claims.exp, 0).single().ok_or_else(invalid)?,
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let Some(token) = extract_bearer_token(req) else {
        let response = ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            "Missing or invalid Authorization header",
        )
        .to_response(StatusCode::UNAUTHORIZED);
        return Err(InternalError::from_response("missing bearer token", response).into());
    };

    let Some(signer) = req.app_data::<web::Data<TokenSigner>>() else {
        tracing::error!("TokenSigner is not registered as app data");
        let response = handle_domain_error(DomainError::Internal {
            message: "token signer unavailable".to_string(),
        });
        return Err(InternalError::from_response("token signer unavailable", response).into());
    };

    signer
        .verify_access_token(token)
        .and_then(AuthenticatedUser::from_claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            let response = handle_domain_error(e);
            InternalError::from_response("access token rejected", response).into()
        })
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
