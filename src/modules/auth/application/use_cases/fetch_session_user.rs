use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::post::application::ports::outgoing::PostQuery;

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum FetchSessionUserError {
    UserNotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchSessionUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchSessionUserError::UserNotFound => write!(f, "User not found"),
            FetchSessionUserError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchSessionUserError {}

// ========================= Response ========================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserPost {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The profile with the password and reset-state fields excluded.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Newest first.
    pub posts: Vec<SessionUserPost>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUserResponse {
    pub user: SessionUserProfile,
}

// ========================= Use Case ========================
#[async_trait]
pub trait IFetchSessionUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid)
        -> Result<SessionUserResponse, FetchSessionUserError>;
}

#[derive(Debug, Clone)]
pub struct FetchSessionUserUseCase<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    user_query: Q,
    post_query: P,
}

impl<Q, P> FetchSessionUserUseCase<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    pub fn new(user_query: Q, post_query: P) -> Self {
        Self {
            user_query,
            post_query,
        }
    }
}

#[async_trait]
impl<Q, P> IFetchSessionUserUseCase for FetchSessionUserUseCase<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<SessionUserResponse, FetchSessionUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(FetchSessionUserError::QueryError)?
            .ok_or(FetchSessionUserError::UserNotFound)?;

        // Derived view: the user's posts are queried, not stored on the user
        let posts = self
            .post_query
            .list_by_author(user.id, 0, None)
            .await
            .map_err(FetchSessionUserError::QueryError)?;

        Ok(SessionUserResponse {
            user: SessionUserProfile {
                id: user.id,
                username: user.username,
                email: user.email,
                bio: user.bio,
                profile_picture: user.profile_picture,
                created_at: user.created_at,
                updated_at: user.updated_at,
                posts: posts
                    .into_iter()
                    .map(|p| SessionUserPost {
                        id: p.id,
                        content: p.content,
                        created_at: p.created_at,
                    })
                    .collect(),
            },
        })
    }
}
