use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub bio: String,
    pub profile_picture: String,
    pub otp: Option<String>,
    pub otp_expiry_time: Option<DateTimeWithTimeZone>,
    pub reset_password_expiry: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::post::adapter::outgoing::sea_orm_entity::posts::Entity")]
    Posts,
}

impl Related<crate::post::adapter::outgoing::sea_orm_entity::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            bio: self.bio.clone(),
            profile_picture: self.profile_picture.clone(),
            otp: self.otp.clone(),
            otp_expiry_time: self.otp_expiry_time.map(|t| t.to_utc()),
            reset_password_expiry: self.reset_password_expiry.map(|t| t.to_utc()),
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
