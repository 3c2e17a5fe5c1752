use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::email::application::ports::outgoing::OtpNotifier;

/// OTP codes live this long; `verifyOtp` rejects anything older.
const OTP_TTL: chrono::Duration = chrono::Duration::minutes(4);

// ========================= Request =========================
#[derive(Debug, Clone)]
pub struct ForgetPasswordRequest {
    email: String,
}

#[derive(Debug, Clone)]
pub enum ForgetPasswordRequestError {
    MissingEmail,
}

impl std::fmt::Display for ForgetPasswordRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForgetPasswordRequestError::MissingEmail => write!(f, "Email is required"),
        }
    }
}

impl std::error::Error for ForgetPasswordRequestError {}

impl ForgetPasswordRequest {
    pub fn new(email: Option<String>) -> Result<Self, ForgetPasswordRequestError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or(ForgetPasswordRequestError::MissingEmail)?;

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum ForgetPasswordError {
    UserNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ForgetPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForgetPasswordError::UserNotFound => write!(f, "User does not exist"),
            ForgetPasswordError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ForgetPasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ForgetPasswordError {}

// ========================= Response ========================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgetPasswordResponse {
    /// Epoch milliseconds, matching the original wire format.
    pub otp_expiry_time: i64,
}

// ========================= Use Case ========================
#[async_trait]
pub trait IForgetPasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        request: ForgetPasswordRequest,
    ) -> Result<ForgetPasswordResponse, ForgetPasswordError>;
}

pub struct ForgetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn OtpNotifier + Send + Sync>,
}

impl<Q, R> ForgetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn OtpNotifier + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Fire-and-forget delivery with bounded retry. The HTTP response never
/// waits for this; a terminal failure is only logged.
fn dispatch_otp_email(notifier: Arc<dyn OtpNotifier + Send + Sync>, email: String, otp: String) {
    tokio::spawn(async move {
        let max_retries = 3;
        for attempt in 1..=max_retries {
            match notifier.send_otp(&email, &otp).await {
                Ok(_) => return,
                Err(e) if attempt < max_retries => {
                    tracing::warn!(
                        "OTP email attempt {}/{} failed for {}: {}. Retrying...",
                        attempt,
                        max_retries,
                        email,
                        e
                    );
                    tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                }
                Err(e) => {
                    tracing::error!(
                        "All {} OTP email attempts failed for {}: {}",
                        max_retries,
                        email,
                        e
                    );
                }
            }
        }
    });
}

#[async_trait]
impl<Q, R> IForgetPasswordUseCase for ForgetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: ForgetPasswordRequest,
    ) -> Result<ForgetPasswordResponse, ForgetPasswordError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(ForgetPasswordError::QueryError)?
            .ok_or(ForgetPasswordError::UserNotFound)?;

        let otp = generate_otp();
        let otp_expiry_time = Utc::now() + OTP_TTL;

        self.repository
            .store_otp(user.id, otp.clone(), otp_expiry_time)
            .await
            .map_err(|e| ForgetPasswordError::RepositoryError(e.to_string()))?;

        dispatch_otp_email(self.notifier.clone(), user.email, otp);

        Ok(ForgetPasswordResponse {
            otp_expiry_time: otp_expiry_time.timestamp_millis(),
        })
    }
}
