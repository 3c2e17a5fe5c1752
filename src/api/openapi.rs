use actix_web::{HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, SuccessResponse};

use crate::auth::adapter::incoming::web::routes::{
    ForgetPasswordRequestDto, LoginRequestDto, ResetPasswordRequestDto, SignupRequestDto,
    VerifyOtpRequestDto,
};
use crate::post::adapter::incoming::web::routes::CreatePostRequestDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ripple API",
        version = "1.0.0",
        description = "Social feed backend: accounts, OTP password reset, posts"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup::signup_handler,
        crate::auth::adapter::incoming::web::routes::login::login_handler,
        crate::auth::adapter::incoming::web::routes::forget_password::forget_password_handler,
        crate::auth::adapter::incoming::web::routes::verify_otp::verify_otp_handler,
        crate::auth::adapter::incoming::web::routes::get_otp_expiry::get_otp_expiry_handler,
        crate::auth::adapter::incoming::web::routes::reset_password::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::session_user::session_user_handler,
        crate::auth::adapter::incoming::web::routes::logout::logout_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::list_posts::list_posts_handler,
        crate::post::adapter::incoming::web::routes::create_post::create_post_handler,
        crate::post::adapter::incoming::web::routes::list_user_posts::list_user_posts_handler,
    ),
    components(
        schemas(
            SuccessResponse<serde_json::Value>,
            ErrorResponse,
            SignupRequestDto,
            LoginRequestDto,
            ForgetPasswordRequestDto,
            VerifyOtpRequestDto,
            ResetPasswordRequestDto,
            CreatePostRequestDto,
        )
    ),
    tags(
        (name = "auth", description = "Accounts, sessions and password reset"),
        (name = "post", description = "Post feed")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn with_security() -> utoipa::openapi::OpenApi {
        let mut openapi = Self::openapi();

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }

        openapi
    }
}

pub async fn serve_openapi() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::with_security())
}
