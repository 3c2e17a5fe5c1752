use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::UserQuery;

// ========================= Request =========================
#[derive(Debug, Clone)]
pub struct GetOtpExpiryRequest {
    email: String,
}

#[derive(Debug, Clone)]
pub enum GetOtpExpiryRequestError {
    MissingEmail,
}

impl std::fmt::Display for GetOtpExpiryRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetOtpExpiryRequestError::MissingEmail => write!(f, "Email is required"),
        }
    }
}

impl std::error::Error for GetOtpExpiryRequestError {}

impl GetOtpExpiryRequest {
    pub fn new(email: Option<String>) -> Result<Self, GetOtpExpiryRequestError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or(GetOtpExpiryRequestError::MissingEmail)?;

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Error ===========================
#[derive(Debug, Clone)]
pub enum GetOtpExpiryError {
    UserNotFound,
    OtpExpired,
    QueryError(String),
}

impl std::fmt::Display for GetOtpExpiryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetOtpExpiryError::UserNotFound => write!(f, "User not found"),
            // The original reports a missing expiry as already expired
            GetOtpExpiryError::OtpExpired => write!(f, "OTP is expired"),
            GetOtpExpiryError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for GetOtpExpiryError {}

// ========================= Response ========================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetOtpExpiryResponse {
    /// Epoch milliseconds.
    pub otp_expiry_time: i64,
}

// ========================= Use Case ========================
#[async_trait]
pub trait IGetOtpExpiryUseCase: Send + Sync {
    async fn execute(
        &self,
        request: GetOtpExpiryRequest,
    ) -> Result<GetOtpExpiryResponse, GetOtpExpiryError>;
}

#[derive(Debug, Clone)]
pub struct GetOtpExpiryUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOtpExpiryUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetOtpExpiryUseCase for GetOtpExpiryUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: GetOtpExpiryRequest,
    ) -> Result<GetOtpExpiryResponse, GetOtpExpiryError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(GetOtpExpiryError::QueryError)?
            .ok_or(GetOtpExpiryError::UserNotFound)?;

        let expiry = user
            .otp_expiry_time
            .ok_or(GetOtpExpiryError::OtpExpired)?;

        Ok(GetOtpExpiryResponse {
            otp_expiry_time: expiry.timestamp_millis(),
        })
    }
}
