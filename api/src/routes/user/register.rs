use actix_web::{web, HttpResponse};
use validator::Validate;

use gk_core::repositories::{TokenRepository, UserRepository};
use gk_core::services::PasswordHasher;

use crate::dto::user_dto::{RegisterRequest, RegisterResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /v1/user/register
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "string",
///     "age": 30
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "user successfully registered",
///     "userId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email or password
/// - 409 Conflict: Email already registered
pub async fn register<U, T, H>(
    state: web::Data<AppState<U, T, H>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    let request = request.into_inner().normalize();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .user_service
        .register(&request.email, &request.password, request.age)
        .await
    {
        Ok(user) => HttpResponse::Created().json(RegisterResponse {
            message: "user successfully registered".to_string(),
            user_id: user.id,
        }),
        Err(error) => handle_domain_error(error),
    }
}
