use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
}

/// Confirmation payload for write operations. Never carries the hash or
/// any reset-state field.
#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write-side access to the user store. The reset-state transitions are
/// expressed as single operations so that OTP and its expiry are always
/// set and cleared together.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    /// Idle -> OtpIssued: store the code with its expiry.
    async fn store_otp(
        &self,
        user_id: Uuid,
        otp: String,
        otp_expiry_time: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// OtpIssued -> ResetAuthorized: clear both OTP fields and open the
    /// reset window.
    async fn authorize_reset(
        &self,
        user_id: Uuid,
        reset_password_expiry: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// ResetAuthorized -> Idle: store the new hash and close the reset
    /// window in the same update.
    async fn reset_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;
}
