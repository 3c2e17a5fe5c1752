use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::domain::entities::AuthorSummary;
use crate::post::application::ports::outgoing::post_repository::{
    CreatePostData, PostRepositoryError,
};
use crate::post::application::ports::outgoing::PostRepository;
use crate::post::application::use_cases::list_posts::PostView;

const MAX_CONTENT_LEN: usize = 1000;
const MAX_TAG_LEN: usize = 20;

// ========================= Request =========================
#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    content: String,
    tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum CreatePostRequestError {
    MissingContent,
    ContentTooLong,
    TagTooLong,
}

impl std::fmt::Display for CreatePostRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePostRequestError::MissingContent => write!(f, "Content is required"),
            CreatePostRequestError::ContentTooLong => {
                write!(f, "Content must be 1000 characters or less")
            }
            CreatePostRequestError::TagTooLong => {
                write!(f, "Each tag must be 20 characters or less")
            }
        }
    }
}

impl std::error::Error for CreatePostRequestError {}

impl CreatePostRequest {
    pub fn new(
        content: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Self, CreatePostRequestError> {
        let content = content
            .filter(|c| !c.trim().is_empty())
            .ok_or(CreatePostRequestError::MissingContent)?;

        if content.chars().count() > MAX_CONTENT_LEN {
            return Err(CreatePostRequestError::ContentTooLong);
        }

        let tags = tags.unwrap_or_default();
        if tags.iter().any(|t| t.chars().count() > MAX_TAG_LEN) {
            return Err(CreatePostRequestError::TagTooLong);
        }

        Ok(Self { content, tags })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum CreatePostError {
    AuthorNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePostError::AuthorNotFound => write!(f, "User not found"),
            CreatePostError::QueryError(msg) => write!(f, "Query error: {}", msg),
            CreatePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreatePostError {}

// ========================= Response ========================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatePostResponse {
    pub post: PostView,
}

// ========================= Use Case ========================
#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<CreatePostResponse, CreatePostError>;
}

#[derive(Debug, Clone)]
pub struct CreatePostUseCase<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    user_query: Q,
}

impl<R, Q> CreatePostUseCase<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(repository: R, user_query: Q) -> Self {
        Self {
            repository,
            user_query,
        }
    }
}

#[async_trait]
impl<R, Q> ICreatePostUseCase for CreatePostUseCase<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<CreatePostResponse, CreatePostError> {
        // Single insert; the FK enforces author existence (no back-reference
        // write, so there is no orphaned-post window)
        let post = self
            .repository
            .create_post(CreatePostData {
                author_id,
                content: request.content().to_string(),
                tags: request.tags().to_vec(),
            })
            .await
            .map_err(|e| match e {
                PostRepositoryError::AuthorNotFound => CreatePostError::AuthorNotFound,
                other => CreatePostError::RepositoryError(other.to_string()),
            })?;

        let author = self
            .user_query
            .find_by_id(author_id)
            .await
            .map_err(CreatePostError::QueryError)?
            .map(|u| AuthorSummary {
                id: u.id,
                username: u.username,
                profile_picture: u.profile_picture,
            });

        Ok(CreatePostResponse {
            post: PostView::from_parts(post, author),
        })
    }
}
