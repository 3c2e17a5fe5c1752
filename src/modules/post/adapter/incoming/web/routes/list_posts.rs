use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::use_cases::list_posts::{
    ListPostsError, ListPostsRequest, ListPostsResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
pub struct ListPostsQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Page size, defaults to 10
    pub limit: Option<u64>,
}

/// Public post feed
///
/// Newest first, author populated. `hasMore` is exact: the query fetches
/// one row beyond the page to decide it.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "post",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "One page of the feed", body = inline(SuccessResponse<ListPostsResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn list_posts_handler(
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.list_posts_use_case;
    let query = query.into_inner();

    let request = ListPostsRequest::new(query.page, query.limit);

    match use_case.execute(request).await {
        Ok(response) => ApiResponse::success(response),

        Err(ListPostsError::QueryError(ref e)) => {
            error!(error = %e, "Listing posts failed");
            ApiResponse::internal_error_detailed(data.env.error_detail(e))
        }
    }
}
