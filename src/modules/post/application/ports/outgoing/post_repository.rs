use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub author_id: Uuid,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write-side access to the post store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: CreatePostData) -> Result<Post, PostRepositoryError>;
}
