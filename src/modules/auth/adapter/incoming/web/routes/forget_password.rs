use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::forget_password::{
    ForgetPasswordError, ForgetPasswordRequest, ForgetPasswordResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ForgetPasswordRequestDto {
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
}

/// Request a password-reset OTP
///
/// Stores a fresh 6-digit code for the account and emails it out-of-band.
/// The response returns the code's expiry, never the code itself.
#[utoipa::path(
    post,
    path = "/api/auth/forgetpassword",
    tag = "auth",
    request_body = ForgetPasswordRequestDto,
    responses(
        (status = 200, description = "OTP issued", body = inline(SuccessResponse<ForgetPasswordResponse>)),
        (status = 400, description = "Missing email or unknown account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgetpassword")]
pub async fn forget_password_handler(
    req: web::Json<ForgetPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.forget_password_use_case;

    let request = match ForgetPasswordRequest::new(req.into_inner().email) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    info!("Password reset OTP requested");

    match use_case.execute(request).await {
        Ok(response) => {
            info!("OTP stored and dispatch scheduled");
            ApiResponse::success_with_message("OTP sent successfully", response)
        }

        Err(ForgetPasswordError::UserNotFound) => {
            warn!("OTP requested for unknown account");
            ApiResponse::bad_request("User does not exist")
        }

        Err(ForgetPasswordError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(ForgetPasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Storing OTP failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
