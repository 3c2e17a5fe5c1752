use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::signup_user::{SignupError, SignupRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Signup request from client
#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,

    /// Optional profile bio, at most 500 characters
    pub bio: Option<String>,
}

/// User signup
///
/// Registers a new account and returns the created user.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (
            status = 201,
            description = "User registered",
            body = inline(SuccessResponse<crate::auth::application::use_cases::signup_user::SignupUserResponse>)
        ),
        (status = 400, description = "Validation failure or duplicate account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.signup_user_use_case;
    let dto = req.into_inner();

    info!("Signup attempt");

    let request = match SignupRequest::new(dto.username, dto.email, dto.password, dto.bio) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Signup rejected by validation");
            return ApiResponse::bad_request(&e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                username = %response.user.username,
                "User registered successfully"
            );
            ApiResponse::created_with_message("User registered successfully", response)
        }

        Err(SignupError::Conflict) => {
            warn!("Signup failed: email or username already in use");
            ApiResponse::bad_request("Email or username already in use")
        }

        Err(SignupError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(SignupError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(SignupError::RepositoryError(ref e)) => {
            error!(error = %e, "User insert failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
