use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::cookies::clear_reset_cookie;
use crate::auth::adapter::incoming::web::extractors::ResetSession;
use crate::auth::application::use_cases::reset_password::{
    ResetPasswordError, ResetPasswordRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequestDto {
    #[schema(example = "NewSecurePass456!")]
    pub new_password: Option<String>,

    #[schema(example = "NewSecurePass456!")]
    pub confirm_password: Option<String>,
}

/// Reset the password
///
/// Requires the `resetPasswordToken` cookie issued by OTP verification and
/// an open reset window. Clears the cookie on success.
#[utoipa::path(
    post,
    path = "/api/auth/resetpassword",
    tag = "auth",
    request_body = ResetPasswordRequestDto,
    responses(
        (status = 200, description = "Password reset, cookie cleared"),
        (status = 400, description = "Missing/mismatched passwords or expired window", body = ErrorResponse),
        (status = 401, description = "Missing or invalid reset authorization", body = ErrorResponse),
        (status = 404, description = "Unknown account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/resetpassword")]
pub async fn reset_password_handler(
    session: ResetSession,
    req: web::Json<ResetPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.reset_password_use_case;
    let dto = req.into_inner();

    let request = match ResetPasswordRequest::new(dto.new_password, dto.confirm_password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    info!(user_id = %session.user_id, "Password reset attempt");

    match use_case.execute(session.user_id, request).await {
        Ok(()) => {
            info!(user_id = %session.user_id, "Password reset successfully");

            HttpResponse::Ok()
                .cookie(clear_reset_cookie(data.env))
                .json(ApiResponse::<()> {
                    success: true,
                    message: Some("Password reset successful".to_string()),
                    data: None,
                })
        }

        Err(ResetPasswordError::UserNotFound) => {
            warn!(user_id = %session.user_id, "Password reset for unknown account");
            ApiResponse::not_found("User not found")
        }

        Err(ResetPasswordError::ResetWindowExpired) => {
            warn!(user_id = %session.user_id, "Password reset after window closed");
            ApiResponse::bad_request("Reset session expired")
        }

        Err(ResetPasswordError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(ResetPasswordError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(ResetPasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Storing new password failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
