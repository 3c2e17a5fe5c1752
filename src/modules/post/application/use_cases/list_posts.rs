use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::post::application::domain::entities::{AuthorSummary, Post, PostWithAuthor};
use crate::post::application::ports::outgoing::PostQuery;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

// ========================= Wire shapes =========================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: Uuid,
    pub username: String,
    pub profile_picture: String,
}

/// A post as every listing returns it: author populated, counts derived.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorView>,
    pub like_count: usize,
    pub comment_count: usize,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PostView {
    pub fn from_parts(post: Post, author: Option<AuthorSummary>) -> Self {
        Self {
            id: post.id,
            like_count: post.like_count(),
            comment_count: post.comment_count(),
            content: post.content,
            author: author.map(|a| AuthorView {
                id: a.id,
                username: a.username,
                profile_picture: a.profile_picture,
            }),
            tags: post.tags,
            created_at: post.created_at,
        }
    }
}

// ========================= Request =============================
/// Page/limit are sanitized, never rejected: zero falls back to the
/// defaults, matching the original query parsing.
#[derive(Debug, Clone, Copy)]
pub struct ListPostsRequest {
    page: u64,
    limit: u64,
}

impl ListPostsRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

// ========================= Error ===============================
#[derive(Debug, Clone)]
pub enum ListPostsError {
    QueryError(String),
}

impl std::fmt::Display for ListPostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListPostsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListPostsError {}

// ========================= Response ============================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub posts: Vec<PostView>,
    pub has_more: bool,
}

// ========================= Use Case ============================
#[async_trait]
pub trait IListPostsUseCase: Send + Sync {
    async fn execute(&self, request: ListPostsRequest)
        -> Result<ListPostsResponse, ListPostsError>;
}

#[derive(Debug, Clone)]
pub struct ListPostsUseCase<P>
where
    P: PostQuery + Send + Sync,
{
    query: P,
}

impl<P> ListPostsUseCase<P>
where
    P: PostQuery + Send + Sync,
{
    pub fn new(query: P) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<P> IListPostsUseCase for ListPostsUseCase<P>
where
    P: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: ListPostsRequest,
    ) -> Result<ListPostsResponse, ListPostsError> {
        // Over-fetch by one so a page holding exactly `limit` rows does
        // not claim a further page exists
        let mut rows = self
            .query
            .list_recent(request.offset(), Some(request.limit() + 1))
            .await
            .map_err(ListPostsError::QueryError)?;

        let has_more = rows.len() as u64 > request.limit();
        rows.truncate(request.limit() as usize);

        Ok(ListPostsResponse {
            posts: rows
                .into_iter()
                .map(|PostWithAuthor { post, author }| PostView::from_parts(post, author))
                .collect(),
            has_more,
        })
    }
}
