use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A feed post as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    /// Ids of users who liked the post.
    pub likes: Vec<Uuid>,
    /// Ids of comment records; comments themselves live elsewhere.
    pub comments: Vec<Uuid>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// The author fields the feed exposes alongside each post.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
    pub profile_picture: String,
}

/// Feed row: a post joined with its author's public fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<AuthorSummary>,
}
