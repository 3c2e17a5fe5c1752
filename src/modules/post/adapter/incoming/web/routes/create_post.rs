use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::post::application::use_cases::create_post::{
    CreatePostError, CreatePostRequest, CreatePostResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreatePostRequestDto {
    #[schema(example = "Hello world!")]
    pub content: Option<String>,

    /// Optional tags, each at most 20 characters
    pub tags: Option<Vec<String>>,
}

/// Create a post
///
/// Session required. The author's post list is a derived view, so this is
/// a single insert.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "post",
    request_body = CreatePostRequestDto,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<CreatePostResponse>)),
        (status = 400, description = "Missing or oversized content", body = ErrorResponse),
        (status = 401, description = "Missing, expired or invalid session token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    session: SessionUser,
    req: web::Json<CreatePostRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.create_post_use_case;
    let dto = req.into_inner();

    let request = match CreatePostRequest::new(dto.content, dto.tags) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    info!(user_id = %session.user_id, "Creating post");

    match use_case.execute(session.user_id, request).await {
        Ok(response) => {
            info!(user_id = %session.user_id, post_id = %response.post.id, "Post created");
            ApiResponse::created_with_message("Post created successfully", response)
        }

        Err(CreatePostError::AuthorNotFound) => {
            warn!(user_id = %session.user_id, "Post creation for unknown account");
            ApiResponse::not_found("User not found")
        }

        Err(CreatePostError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }

        Err(CreatePostError::RepositoryError(ref e)) => {
            error!(error = %e, "Post insert failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
