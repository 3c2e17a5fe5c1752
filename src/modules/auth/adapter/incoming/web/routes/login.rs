use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::session_cookie;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginUserResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

/// User login
///
/// Authenticates with email and password. The session token is set as the
/// `token` cookie and echoed in the body.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginUserResponse>)),
        (status = 400, description = "Missing fields or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    info!("Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in successfully");

            HttpResponse::Ok()
                .cookie(session_cookie(response.token.clone(), data.env))
                .json(ApiResponse {
                    success: true,
                    message: Some("Login successful".to_string()),
                    data: Some(response),
                })
        }

        // Unknown email and wrong password share one message and status
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::bad_request("Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
