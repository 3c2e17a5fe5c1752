use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    // JSON arrays mirroring the document shape: user ids, comment ids,
    // short tag strings.
    pub likes: Json,
    pub comments: Json,
    pub tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AuthorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Author,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn json_ids(value: &Json) -> Vec<Uuid> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn json_strings(value: &Json) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

impl Model {
    pub fn to_domain(&self) -> Post {
        Post {
            id: self.id,
            author_id: self.author_id,
            content: self.content.clone(),
            likes: json_ids(&self.likes),
            comments: json_ids(&self.comments),
            tags: json_strings(&self.tags),
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn malformed_json_columns_degrade_to_empty_lists() {
        let now = Utc::now().fixed_offset();
        let model = Model {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            content: "hello".to_string(),
            likes: serde_json::json!("not-an-array"),
            comments: serde_json::json!(null),
            tags: serde_json::json!([{"nested": true}]),
            created_at: now,
            updated_at: now,
        };

        let post = model.to_domain();
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
        assert!(post.tags.is_empty());
    }

    #[test]
    fn json_columns_round_trip_into_domain_lists() {
        let liker = Uuid::new_v4();
        let now = Utc::now().fixed_offset();
        let model = Model {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            content: "hello".to_string(),
            likes: serde_json::json!([liker]),
            comments: serde_json::json!([]),
            tags: serde_json::json!(["intro", "rust"]),
            created_at: now,
            updated_at: now,
        };

        let post = model.to_domain();
        assert_eq!(post.likes, vec![liker]);
        assert_eq!(post.like_count(), 1);
        assert_eq!(post.comment_count(), 0);
        assert_eq!(post.tags, vec!["intro".to_string(), "rust".to_string()]);
    }
}
