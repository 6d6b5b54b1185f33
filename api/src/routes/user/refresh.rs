use actix_web::{web, HttpResponse};

use gk_core::repositories::{TokenRepository, UserRepository};
use gk_core::services::PasswordHasher;

use crate::dto::user_dto::RefreshTokenRequest;
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /v1/user/refresh
///
/// Exchanges a refresh token for a new access token. The refresh token
/// itself is not rotated.
///
/// # Request Body
///
/// ```json
/// {
///     "refreshToken": "string"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid or expired session
/// - 500 Internal Server Error: Token signing or storage failure
pub async fn refresh<U, T, H>(
    state: web::Data<AppState<U, T, H>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.session_service.refresh(&request.refresh_token).await {
        Ok(refreshed) => HttpResponse::Ok().json(refreshed),
        Err(error) => handle_domain_error(error),
    }
}
