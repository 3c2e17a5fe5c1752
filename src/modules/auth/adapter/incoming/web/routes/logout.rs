use crate::auth::adapter::incoming::web::cookies::clear_session_cookie;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::info;

/// Logout
///
/// Clears the session cookie. Sessions are stateless JWTs, so there is
/// nothing to revoke server-side; the call succeeds with or without a
/// cookie present.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cookie cleared"),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(data: web::Data<AppState>) -> impl Responder {
    info!("User logout");

    HttpResponse::Ok()
        .cookie(clear_session_cookie(data.env))
        .json(ApiResponse::<()> {
            success: true,
            message: Some("Logout successful".to_string()),
            data: None,
        })
}
