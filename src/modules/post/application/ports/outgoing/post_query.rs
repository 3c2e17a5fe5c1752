use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::{Post, PostWithAuthor};

/// Read-side access to the post store. Listings are newest-first; `fetch`
/// is the raw row count the caller asks for (`None` = no limit), so a
/// caller probing for a further page passes its page size plus one.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn list_recent(
        &self,
        offset: u64,
        fetch: Option<u64>,
    ) -> Result<Vec<PostWithAuthor>, String>;

    async fn list_by_author(
        &self,
        author_id: Uuid,
        offset: u64,
        fetch: Option<u64>,
    ) -> Result<Vec<Post>, String>;
}
