use actix_web::{web, HttpResponse};

use gk_core::repositories::{TokenRepository, UserRepository};
use gk_core::services::PasswordHasher;

use crate::dto::user_dto::LoginRequest;
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /v1/user/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "opaque_43_char_token",
///     "tokenType": "Bearer",
///     "expiresIn": 900,
///     "user": { "id": "...", "email": "alice@example.com" }
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid email or password (one response for both)
/// - 500 Internal Server Error: Token issuance or storage failure
pub async fn login<U, T, H>(
    state: web::Data<AppState<U, T, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .session_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(error) => handle_domain_error(error),
    }
}
