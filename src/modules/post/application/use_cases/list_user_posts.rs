use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::domain::entities::AuthorSummary;
use crate::post::application::ports::outgoing::PostQuery;
use crate::post::application::use_cases::list_posts::{ListPostsRequest, PostView};

// ========================= Request =========================
#[derive(Debug, Clone, Copy)]
pub struct ListUserPostsRequest {
    user_id: Uuid,
    paging: ListPostsRequest,
}

impl ListUserPostsRequest {
    pub fn new(user_id: Uuid, page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            user_id,
            paging: ListPostsRequest::new(page, limit),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn limit(&self) -> u64 {
        self.paging.limit()
    }

    pub fn offset(&self) -> u64 {
        self.paging.offset()
    }
}

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum ListUserPostsError {
    UserNotFound,
    QueryError(String),
}

impl std::fmt::Display for ListUserPostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUserPostsError::UserNotFound => write!(f, "User not found"),
            ListUserPostsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListUserPostsError {}

// ========================= Response ========================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListUserPostsResponse {
    pub posts: Vec<PostView>,
    pub has_more: bool,
}

// ========================= Use Case ========================
#[async_trait]
pub trait IListUserPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        request: ListUserPostsRequest,
    ) -> Result<ListUserPostsResponse, ListUserPostsError>;
}

#[derive(Debug, Clone)]
pub struct ListUserPostsUseCase<P, Q>
where
    P: PostQuery + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    post_query: P,
    user_query: Q,
}

impl<P, Q> ListUserPostsUseCase<P, Q>
where
    P: PostQuery + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(post_query: P, user_query: Q) -> Self {
        Self {
            post_query,
            user_query,
        }
    }
}

#[async_trait]
impl<P, Q> IListUserPostsUseCase for ListUserPostsUseCase<P, Q>
where
    P: PostQuery + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: ListUserPostsRequest,
    ) -> Result<ListUserPostsResponse, ListUserPostsError> {
        let author = self
            .user_query
            .find_by_id(request.user_id())
            .await
            .map_err(ListUserPostsError::QueryError)?
            .ok_or(ListUserPostsError::UserNotFound)?;

        let author = AuthorSummary {
            id: author.id,
            username: author.username,
            profile_picture: author.profile_picture,
        };

        let mut rows = self
            .post_query
            .list_by_author(request.user_id(), request.offset(), Some(request.limit() + 1))
            .await
            .map_err(ListUserPostsError::QueryError)?;

        let has_more = rows.len() as u64 > request.limit();
        rows.truncate(request.limit() as usize);

        Ok(ListUserPostsResponse {
            posts: rows
                .into_iter()
                .map(|post| PostView::from_parts(post, Some(author.clone())))
                .collect(),
            has_more,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::post::application::domain::entities::{Post, PostWithAuthor};
    use chrono::Utc;

    struct MockPostQuery {
        posts: Vec<Post>,
    }

    #[async_trait]
    impl PostQuery for MockPostQuery {
        async fn list_recent(
            &self,
            _offset: u64,
            _fetch: Option<u64>,
        ) -> Result<Vec<PostWithAuthor>, String> {
            Ok(Vec::new())
        }

        async fn list_by_author(
            &self,
            author_id: Uuid,
            offset: u64,
            fetch: Option<u64>,
        ) -> Result<Vec<Post>, String> {
            let take = fetch.map(|f| f as usize).unwrap_or(self.posts.len());
            Ok(self
                .posts
                .iter()
                .filter(|p| p.author_id == author_id)
                .skip(offset as usize)
                .take(take)
                .cloned()
                .collect())
        }
    }

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, String> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn email_or_username_taken(
            &self,
            _email: &str,
            _username: &str,
        ) -> Result<bool, String> {
            Ok(false)
        }
    }

    fn author() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: "author".to_string(),
            email: "author@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            bio: String::new(),
            profile_picture: String::new(),
            otp: None,
            otp_expiry_time: None,
            reset_password_expiry: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn post(author_id: Uuid, content: &str) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            author_id,
            content: content.to_string(),
            likes: Vec::new(),
            comments: Vec::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_user_posts_unknown_user() {
        let use_case = ListUserPostsUseCase::new(
            MockPostQuery { posts: Vec::new() },
            MockUserQuery { user: None },
        );

        let request = ListUserPostsRequest::new(Uuid::new_v4(), None, None);
        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(ListUserPostsError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_list_user_posts_exactly_limit_has_no_more() {
        let user = author();
        let user_id = user.id;
        let posts: Vec<_> = (0..5).map(|i| post(user_id, &format!("post {}", i))).collect();

        let use_case = ListUserPostsUseCase::new(
            MockPostQuery { posts },
            MockUserQuery { user: Some(user) },
        );

        let request = ListUserPostsRequest::new(user_id, Some(1), Some(5));
        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.posts.len(), 5);
        assert!(!response.has_more);
    }

    #[tokio::test]
    async fn test_list_user_posts_populates_author_on_every_row() {
        let user = author();
        let user_id = user.id;
        let posts = vec![post(user_id, "one"), post(user_id, "two")];

        let use_case = ListUserPostsUseCase::new(
            MockPostQuery { posts },
            MockUserQuery { user: Some(user) },
        );

        let request = ListUserPostsRequest::new(user_id, None, None);
        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.posts.len(), 2);
        for post in &response.posts {
            let author = post.author.as_ref().expect("Author should be populated");
            assert_eq!(author.id, user_id);
            assert_eq!(author.username, "author");
        }
    }

    #[tokio::test]
    async fn test_list_user_posts_second_page_flags_more() {
        let user = author();
        let user_id = user.id;
        let posts: Vec<_> = (0..7).map(|i| post(user_id, &format!("post {}", i))).collect();

        let use_case = ListUserPostsUseCase::new(
            MockPostQuery { posts },
            MockUserQuery { user: Some(user) },
        );

        let request = ListUserPostsRequest::new(user_id, Some(1), Some(3));
        let response = use_case.execute(request).await.unwrap();
        assert_eq!(response.posts.len(), 3);
        assert!(response.has_more);

        let request = ListUserPostsRequest::new(user_id, Some(3), Some(3));
        let response = use_case.execute(request).await.unwrap();
        assert_eq!(response.posts.len(), 1);
        assert!(!response.has_more);
    }
}
