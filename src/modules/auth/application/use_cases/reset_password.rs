use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::auth::application::services::hash::PasswordHasher;

// ========================= Request =========================
/// The caller's identity comes from the reset token, not the body.
#[derive(Debug, Clone)]
pub struct ResetPasswordRequest {
    new_password: String,
}

#[derive(Debug, Clone)]
pub enum ResetPasswordRequestError {
    MissingFields,
    PasswordMismatch,
}

impl std::fmt::Display for ResetPasswordRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPasswordRequestError::MissingFields => {
                write!(f, "Both password fields are required")
            }
            ResetPasswordRequestError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ResetPasswordRequestError {}

impl ResetPasswordRequest {
    pub fn new(
        new_password: Option<String>,
        confirm_password: Option<String>,
    ) -> Result<Self, ResetPasswordRequestError> {
        let new_password = new_password
            .filter(|p| !p.is_empty())
            .ok_or(ResetPasswordRequestError::MissingFields)?;
        let confirm_password = confirm_password
            .filter(|p| !p.is_empty())
            .ok_or(ResetPasswordRequestError::MissingFields)?;

        if new_password != confirm_password {
            return Err(ResetPasswordRequestError::PasswordMismatch);
        }

        Ok(Self { new_password })
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum ResetPasswordError {
    UserNotFound,
    ResetWindowExpired,
    HashingFailed(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ResetPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPasswordError::UserNotFound => write!(f, "User not found"),
            ResetPasswordError::ResetWindowExpired => write!(f, "Reset session expired"),
            ResetPasswordError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            ResetPasswordError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ResetPasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ResetPasswordError {}

// ========================= Use Case ========================
#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: ResetPasswordRequest,
    ) -> Result<(), ResetPasswordError>;
}

#[derive(Debug, Clone)]
pub struct ResetPasswordUseCase<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: H,
}

impl<Q, R, H> ResetPasswordUseCase<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: H) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R, H> IResetPasswordUseCase for ResetPasswordUseCase<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: ResetPasswordRequest,
    ) -> Result<(), ResetPasswordError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(ResetPasswordError::QueryError)?
            .ok_or(ResetPasswordError::UserNotFound)?;

        // Lazy invalidation: the window is checked here, never swept
        if !user.reset_window_open(Utc::now()) {
            return Err(ResetPasswordError::ResetWindowExpired);
        }

        let new_password_hash = self
            .hasher
            .hash_password(request.new_password())
            .map_err(ResetPasswordError::HashingFailed)?;

        self.repository
            .reset_password(user.id, new_password_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::user_repository::{
        CreateUserData, UserRepositoryError, UserResult,
    };
    use chrono::{DateTime, Duration};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_request_requires_both_fields() {
        assert!(matches!(
            ResetPasswordRequest::new(Some("secret".to_string()), None),
            Err(ResetPasswordRequestError::MissingFields)
        ));
        assert!(matches!(
            ResetPasswordRequest::new(None, Some("secret".to_string())),
            Err(ResetPasswordRequestError::MissingFields)
        ));
    }

    #[test]
    fn test_request_rejects_mismatched_passwords() {
        let result = ResetPasswordRequest::new(
            Some("secret-one".to_string()),
            Some("secret-two".to_string()),
        );
        assert!(matches!(
            result,
            Err(ResetPasswordRequestError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_request_error_display() {
        assert_eq!(
            ResetPasswordRequestError::MissingFields.to_string(),
            "Both password fields are required"
        );
        assert_eq!(
            ResetPasswordRequestError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            ResetPasswordError::ResetWindowExpired.to_string(),
            "Reset session expired"
        );
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

    #[derive(Default)]
    struct RecordingRepository {
        reset: Arc<Mutex<Option<(Uuid, String)>>>,
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn create_user(
            &self,
            _user: CreateUserData,
        ) -> Result<UserResult, UserRepositoryError> {
            unreachable!()
        }

        async fn store_otp(
            &self,
            _user_id: Uuid,
            _otp: String,
            _otp_expiry_time: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            unreachable!()
        }

        async fn authorize_reset(
            &self,
            _user_id: Uuid,
            _reset_password_expiry: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            unreachable!()
        }

        async fn reset_password(
            &self,
            user_id: Uuid,
            new_password_hash: String,
        ) -> Result<(), UserRepositoryError> {
            *self.reset.lock().unwrap() = Some((user_id, new_password_hash));
            Ok(())
        }
    }

    struct MockPasswordHasher;

    impl PasswordHasher for MockPasswordHasher {
        fn hash_password(&self, password: &str) -> Result<String, String> {
            Ok(format!("hashed::{}", password))
        }

        fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
            Ok(true)
        }
    }

    fn user_in_reset_window(expiry_offset: Duration) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "old_hash".to_string(),
            bio: String::new(),
            profile_picture: String::new(),
            otp: None,
            otp_expiry_time: None,
            reset_password_expiry: Some(now + expiry_offset),
            created_at: now,
            updated_at: now,
        }
    }

    fn request() -> ResetPasswordRequest {
        ResetPasswordRequest::new(
            Some("new-secret".to_string()),
            Some("new-secret".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_reset_password_success_inside_window() {
        let user = user_in_reset_window(Duration::minutes(30));
        let user_id = user.id;
        let reset = Arc::new(Mutex::new(None));

        let use_case = ResetPasswordUseCase::new(
            MockUserQuery { user: Some(user) },
            RecordingRepository {
                reset: reset.clone(),
            },
            MockPasswordHasher,
        );

        let result = use_case.execute(user_id, request()).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        let (id, hash) = reset.lock().unwrap().clone().expect("Password should be reset");
        assert_eq!(id, user_id);
        assert_eq!(hash, "hashed::new-secret");
    }

    #[tokio::test]
    async fn test_reset_password_after_window_expires() {
        let user = user_in_reset_window(-Duration::seconds(1));
        let user_id = user.id;

        let use_case = ResetPasswordUseCase::new(
            MockUserQuery { user: Some(user) },
            RecordingRepository::default(),
            MockPasswordHasher,
        );

        let result = use_case.execute(user_id, request()).await;

        assert!(matches!(result, Err(ResetPasswordError::ResetWindowExpired)));
    }

    #[tokio::test]
    async fn test_reset_password_without_open_window() {
        let mut user = user_in_reset_window(Duration::minutes(30));
        user.reset_password_expiry = None;
        let user_id = user.id;

        let use_case = ResetPasswordUseCase::new(
            MockUserQuery { user: Some(user) },
            RecordingRepository::default(),
            MockPasswordHasher,
        );

        let result = use_case.execute(user_id, request()).await;

        assert!(matches!(result, Err(ResetPasswordError::ResetWindowExpired)));
    }

    #[tokio::test]
    async fn test_reset_password_unknown_user() {
        let use_case = ResetPasswordUseCase::new(
            MockUserQuery { user: None },
            RecordingRepository::default(),
            MockPasswordHasher,
        );

        let result = use_case.execute(Uuid::new_v4(), request()).await;

        assert!(matches!(result, Err(ResetPasswordError::UserNotFound)));
    }
}
