use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::get_otp_expiry::{
    GetOtpExpiryError, GetOtpExpiryRequest, GetOtpExpiryResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct GetOtpExpiryQuery {
    #[param(example = "john@example.com")]
    pub email: Option<String>,
}

/// Read the pending OTP's expiry
///
/// Lets the client drive its countdown timer. Read-only; whatever the
/// stored expiry is, it is returned as-is.
#[utoipa::path(
    get,
    path = "/api/auth/getotpexpiry",
    tag = "auth",
    params(GetOtpExpiryQuery),
    responses(
        (status = 200, description = "Pending expiry", body = inline(SuccessResponse<GetOtpExpiryResponse>)),
        (status = 400, description = "Missing email or no pending OTP", body = ErrorResponse),
        (status = 404, description = "Unknown account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/getotpexpiry")]
pub async fn get_otp_expiry_handler(
    query: web::Query<GetOtpExpiryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.get_otp_expiry_use_case;

    let request = match GetOtpExpiryRequest::new(query.into_inner().email) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match use_case.execute(request).await {
        Ok(response) => ApiResponse::success(response),

        Err(GetOtpExpiryError::UserNotFound) => {
            warn!("OTP expiry lookup for unknown account");
            ApiResponse::not_found("User not found")
        }

        Err(GetOtpExpiryError::OtpExpired) => {
            warn!("OTP expiry lookup with no pending OTP");
            ApiResponse::bad_request("OTP is expired")
        }

        Err(GetOtpExpiryError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
