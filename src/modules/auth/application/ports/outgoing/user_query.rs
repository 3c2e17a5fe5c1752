use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

/// Read-side access to the user store.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String>;

    /// Email is stored lowercase; callers pass a normalized address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;

    /// Single OR-filter lookup backing the signup conflict check.
    async fn email_or_username_taken(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, String>;
}
