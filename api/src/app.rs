//! Application factory
//!
//! Builds the Actix-web application from already constructed services.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use gk_core::repositories::{TokenRepository, UserRepository};
use gk_core::services::PasswordHasher;
use gk_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::json_error_handler;
use crate::routes::health::health_check;
use crate::routes::user::{login, me, refresh, register, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, T, H>(
    app_state: web::Data<AppState<U, T, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    H: PasswordHasher + 'static,
{
    // The access token extractor looks the signer up on its own
    let signer = web::Data::from(app_state.session_service.signer().clone());

    App::new()
        .app_data(app_state)
        .app_data(signer)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/v1/user")
                .route("/register", web::post().to(register::<U, T, H>))
                .route("/login", web::post().to(login::<U, T, H>))
                .route("/refresh", web::post().to(refresh::<U, T, H>))
                .route("/me", web::get().to(me)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
