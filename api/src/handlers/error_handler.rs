//! Mapping of domain errors to HTTP responses
//!
//! Client-caused failures get a fixed, generic message. Server-side failures
//! are logged with their detail and answered with "An internal error occurred".

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use gk_core::errors::{AuthError, DomainError, TokenError};
use gk_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Convert a domain error into an HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code, message) = match &error {
        DomainError::Auth(AuthError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_CREDENTIALS,
            AuthError::InvalidCredentials.to_string(),
        ),
        DomainError::Auth(AuthError::InvalidSession) => (
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_SESSION,
            AuthError::InvalidSession.to_string(),
        ),
        DomainError::Token(TokenError::AccessTokenExpired) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_EXPIRED,
            TokenError::AccessTokenExpired.to_string(),
        ),
        DomainError::Token(TokenError::InvalidAccessToken) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_INVALID,
            TokenError::InvalidAccessToken.to_string(),
        ),
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::Conflict { .. } => (
            StatusCode::CONFLICT,
            error_codes::CONFLICT,
            "Email already registered".to_string(),
        ),
        DomainError::Token(TokenError::Signing { .. })
        | DomainError::Token(TokenError::Entropy { .. })
        | DomainError::Persistence { .. }
        | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "Request failed with an internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                INTERNAL_MESSAGE.to_string(),
            )
        }
    };

    ErrorResponse::new(code, message).to_response(status)
}

/// Convert DTO validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", field, detail)
        })
        .collect();
    fields.sort();

    ErrorResponse::new(error_codes::VALIDATION_ERROR, fields.join("; "))
        .to_response(StatusCode::BAD_REQUEST)
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    let response =
        ErrorResponse::new(error_codes::BAD_REQUEST, "Invalid Input").to_response(StatusCode::BAD_REQUEST);
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_credentials_error_is_generic() {
        let response = handle_domain_error(AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INVALID_CREDENTIALS");
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_session_error() {
        let response = handle_domain_error(AuthError::InvalidSession.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "INVALID_SESSION");
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_exposed() {
        let response = handle_domain_error(DomainError::Persistence {
            message: "connection refused to db-primary:5432".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], INTERNAL_MESSAGE);
        assert!(!body.to_string().contains("db-primary"));
    }

    #[actix_web::test]
    async fn test_entropy_failure_is_internal() {
        let response = handle_domain_error(DomainError::Token(TokenError::Entropy {
            message: "getrandom failed".to_string(),
        }));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_validation_and_conflict() {
        let validation = handle_domain_error(DomainError::Validation {
            message: "Invalid Email or Password".to_string(),
        });
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let conflict = handle_domain_error(DomainError::Conflict {
            message: "users_email_key".to_string(),
        });
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(conflict).await["message"], "Email already registered");
    }
}
