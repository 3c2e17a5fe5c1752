use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::post::application::use_cases::list_user_posts::{
    ListUserPostsError, ListUserPostsRequest, ListUserPostsResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Deserialize, IntoParams)]
pub struct ListUserPostsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// A user's posts
///
/// Session required. 404s when the requested user does not exist, even if
/// the page would be empty anyway.
#[utoipa::path(
    get,
    path = "/api/posts/{id}/posts",
    tag = "post",
    params(
        ("id" = Uuid, Path, description = "Author's user id"),
        ListUserPostsQuery
    ),
    responses(
        (status = 200, description = "One page of the user's posts", body = inline(SuccessResponse<ListUserPostsResponse>)),
        (status = 401, description = "Missing, expired or invalid session token", body = ErrorResponse),
        (status = 404, description = "User does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}/posts")]
pub async fn list_user_posts_handler(
    _session: SessionUser,
    path: web::Path<Uuid>,
    query: web::Query<ListUserPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.list_user_posts_use_case;
    let user_id = path.into_inner();
    let query = query.into_inner();

    let request = ListUserPostsRequest::new(user_id, query.page, query.limit);

    match use_case.execute(request).await {
        Ok(response) => ApiResponse::success(response),

        Err(ListUserPostsError::UserNotFound) => {
            warn!(%user_id, "Posts listed for unknown user");
            ApiResponse::not_found("User not found")
        }

        Err(ListUserPostsError::QueryError(ref e)) => {
            error!(error = %e, "Listing user posts failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
