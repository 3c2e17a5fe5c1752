use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::ports::outgoing::post_repository::{
    CreatePostData, PostRepository, PostRepositoryError,
};
use crate::post::application::domain::entities::Post;

use super::sea_orm_entity::posts::ActiveModel as PostActiveModel;

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, post: CreatePostData) -> Result<Post, PostRepositoryError> {
        let active_post = PostActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(post.author_id),
            content: Set(post.content),
            likes: NotSet,
            comments: NotSet,
            tags: Set(serde_json::json!(post.tags)),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_post.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            // The author_id FK is the only constraint an insert can trip
            if err_str.contains("23503") || err_str.contains("foreign key") {
                return PostRepositoryError::AuthorNotFound;
            }
            PostRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_domain())
    }
}
