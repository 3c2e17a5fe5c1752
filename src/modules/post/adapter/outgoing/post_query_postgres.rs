use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::ports::outgoing::PostQuery;
use crate::post::application::domain::entities::{AuthorSummary, Post, PostWithAuthor};

use super::sea_orm_entity::posts::{Column as PostColumn, Entity as PostEntity};
use crate::auth::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_recent(
        &self,
        offset: u64,
        fetch: Option<u64>,
    ) -> Result<Vec<PostWithAuthor>, String> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(PostColumn::CreatedAt)
            .offset(offset)
            .limit(fetch)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(rows
            .into_iter()
            .map(|(post, author)| PostWithAuthor {
                post: post.to_domain(),
                author: author.map(|a| AuthorSummary {
                    id: a.id,
                    username: a.username,
                    profile_picture: a.profile_picture,
                }),
            })
            .collect())
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
        offset: u64,
        fetch: Option<u64>,
    ) -> Result<Vec<Post>, String> {
        let rows = PostEntity::find()
            .filter(PostColumn::AuthorId.eq(author_id))
            .order_by_desc(PostColumn::CreatedAt)
            .offset(offset)
            .limit(fetch)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }
}
