use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::cookies::reset_cookie;
use crate::auth::application::use_cases::verify_otp::{VerifyOtpError, VerifyOtpRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct VerifyOtpRequestDto {
    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    #[schema(example = "123456")]
    pub otp: Option<String>,
}

/// Verify a password-reset OTP
///
/// On success the reset authorization travels only as the
/// `resetPasswordToken` cookie; the body carries no token.
#[utoipa::path(
    post,
    path = "/api/auth/verifyotp",
    tag = "auth",
    request_body = VerifyOtpRequestDto,
    responses(
        (status = 200, description = "OTP verified, reset cookie set"),
        (status = 400, description = "Missing fields, unknown account, expired or wrong OTP", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/verifyotp")]
pub async fn verify_otp_handler(
    req: web::Json<VerifyOtpRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.verify_otp_use_case;
    let dto = req.into_inner();

    let request = match VerifyOtpRequest::new(dto.email, dto.otp) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    info!("OTP verification attempt");

    match use_case.execute(request).await {
        Ok(response) => {
            info!("OTP verified, reset window opened");

            HttpResponse::Ok()
                .cookie(reset_cookie(response.reset_token, data.env))
                .json(ApiResponse::<()> {
                    success: true,
                    message: Some("OTP verified successfully".to_string()),
                    data: None,
                })
        }

        Err(VerifyOtpError::UserNotFound) => {
            warn!("OTP verification for unknown account");
            ApiResponse::bad_request("User does not exist")
        }

        Err(VerifyOtpError::OtpExpired) => {
            warn!("OTP verification failed: expired");
            ApiResponse::bad_request("OTP has expired")
        }

        Err(VerifyOtpError::OtpMismatch) => {
            warn!("OTP verification failed: mismatch");
            ApiResponse::bad_request("Invalid OTP")
        }

        Err(VerifyOtpError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Reset token generation failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(VerifyOtpError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(VerifyOtpError::RepositoryError(ref e)) => {
            error!(error = %e, "Authorizing reset failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
