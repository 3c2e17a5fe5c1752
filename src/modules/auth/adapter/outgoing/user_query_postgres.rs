use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::UserQuery;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn email_or_username_taken(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, String> {
        let count = UserEntity::find()
            .filter(
                Condition::any()
                    .add(UserColumn::Email.eq(email))
                    .add(UserColumn::Username.eq(username)),
            )
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(count > 0)
    }
}
