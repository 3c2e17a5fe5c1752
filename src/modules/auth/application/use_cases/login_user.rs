use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery};
use crate::auth::application::services::hash::PasswordHasher;

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    MissingFields,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::MissingFields => write!(f, "All fields are required"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, LoginRequestError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or(LoginRequestError::MissingFields)?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(LoginRequestError::MissingFields)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ====================== Login Response ==========================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUserInfo {
    pub id: uuid::Uuid,
    pub email: String,
    pub username: String,
}

/// The token doubles as the session cookie value; the handler sets the
/// cookie and keeps the token in the body, as the original API did.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUserResponse {
    pub token: String,
    pub user: LoginUserInfo,
}

// ====================== Login Use Case ==========================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Debug, Clone)]
pub struct LoginUserUseCase<Q, H, T>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    query: Q,
    hasher: H,
    token_provider: T,
}

impl<Q, H, T> LoginUserUseCase<Q, H, T>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    pub fn new(query: Q, hasher: H, token_provider: T) -> Self {
        Self {
            query,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, H, T> ILoginUserUseCase for LoginUserUseCase<Q, H, T>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // Unknown email and wrong password are indistinguishable on the wire
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(LoginError::QueryError)?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .hasher
            .verify_password(request.password(), &user.password_hash)
            .map_err(LoginError::PasswordVerificationFailed)?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_session_token(user.id, &user.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            token,
            user: LoginUserInfo {
                id: user.id,
                email: user.email,
                username: user.username,
            },
        })
    }
}
