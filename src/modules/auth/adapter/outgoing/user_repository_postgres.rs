use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{CreateUserData, UserResult};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            email: model.email,
            username: model.username,
            bio: model.bio,
        }
    }

    async fn find_active_model(
        &self,
        user_id: Uuid,
    ) -> Result<UserActiveModel, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(user.into())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let user_id = Uuid::new_v4();
        let active_user = UserActiveModel {
            id: Set(user_id),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            bio: Set(user.bio),
            profile_picture: NotSet,
            otp: NotSet,
            otp_expiry_time: NotSet,
            reset_password_expiry: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn store_otp(
        &self,
        user_id: Uuid,
        otp: String,
        otp_expiry_time: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.find_active_model(user_id).await?;
        active_user.otp = Set(Some(otp));
        active_user.otp_expiry_time = Set(Some(otp_expiry_time.into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn authorize_reset(
        &self,
        user_id: Uuid,
        reset_password_expiry: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.find_active_model(user_id).await?;
        // Consume the OTP and open the reset window in one update
        active_user.otp = Set(None);
        active_user.otp_expiry_time = Set(None);
        active_user.reset_password_expiry = Set(Some(reset_password_expiry.into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn reset_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.find_active_model(user_id).await?;
        active_user.password_hash = Set(new_password_hash);
        active_user.reset_password_expiry = Set(None);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
