use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery, UserRepository};

/// How long the reset window stays open after a successful verification.
const RESET_WINDOW: chrono::Duration = chrono::Duration::hours(1);

// ========================= Request =========================
#[derive(Debug, Clone)]
pub struct VerifyOtpRequest {
    email: String,
    otp: String,
}

#[derive(Debug, Clone)]
pub enum VerifyOtpRequestError {
    MissingFields,
}

impl std::fmt::Display for VerifyOtpRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyOtpRequestError::MissingFields => write!(f, "Email and OTP are required"),
        }
    }
}

impl std::error::Error for VerifyOtpRequestError {}

impl VerifyOtpRequest {
    pub fn new(
        email: Option<String>,
        otp: Option<String>,
    ) -> Result<Self, VerifyOtpRequestError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or(VerifyOtpRequestError::MissingFields)?;
        let otp = otp
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .ok_or(VerifyOtpRequestError::MissingFields)?;

        Ok(Self { email, otp })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }
}

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum VerifyOtpError {
    UserNotFound,
    OtpExpired,
    OtpMismatch,
    TokenGenerationFailed(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for VerifyOtpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyOtpError::UserNotFound => write!(f, "User not found"),
            VerifyOtpError::OtpExpired => write!(f, "OTP has expired"),
            VerifyOtpError::OtpMismatch => write!(f, "Invalid OTP"),
            VerifyOtpError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            VerifyOtpError::QueryError(msg) => write!(f, "Query error: {}", msg),
            VerifyOtpError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for VerifyOtpError {}

// ========================= Response ========================
/// Carries the reset token for the handler to set as the
/// `resetPasswordToken` cookie; it never appears in the body.
#[derive(Debug, Clone)]
pub struct VerifyOtpResponse {
    pub reset_token: String,
}

// ========================= Use Case ========================
#[async_trait]
pub trait IVerifyOtpUseCase: Send + Sync {
    async fn execute(&self, request: VerifyOtpRequest)
        -> Result<VerifyOtpResponse, VerifyOtpError>;
}

#[derive(Debug, Clone)]
pub struct VerifyOtpUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    query: Q,
    repository: R,
    token_provider: T,
}

impl<Q, R, T> VerifyOtpUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    pub fn new(query: Q, repository: R, token_provider: T) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R, T> IVerifyOtpUseCase for VerifyOtpUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(
        &self,
        request: VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, VerifyOtpError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(VerifyOtpError::QueryError)?
            .ok_or(VerifyOtpError::UserNotFound)?;

        let now = Utc::now();

        // Lazy invalidation: a stale OTP is only detected here, never swept
        if !user.has_live_otp(now) {
            return Err(VerifyOtpError::OtpExpired);
        }

        if user.otp.as_deref() != Some(request.otp()) {
            return Err(VerifyOtpError::OtpMismatch);
        }

        self.repository
            .authorize_reset(user.id, now + RESET_WINDOW)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;

        let reset_token = self
            .token_provider
            .issue_reset_token(user.id)
            .map_err(|e| VerifyOtpError::TokenGenerationFailed(e.to_string()))?;

        Ok(VerifyOtpResponse { reset_token })
    }
}
