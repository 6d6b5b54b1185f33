use actix_web::HttpResponse;

use crate::dto::user_dto::MeResponse;
use crate::middleware::AuthenticatedUser;

/// Handler for GET /v1/user/me
///
/// Returns the identity carried by the presented access token.
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        id: user.user_id,
        email: user.email,
        issued_at: user.issued_at,
        expires_at: user.expires_at,
    })
}
