use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::user_repository::CreateUserData;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::auth::application::services::hash::PasswordHasher;

const MAX_BIO_LEN: usize = 500;

// ========================= Signup Request =========================
/// Validated signup request. `bio` is optional and defaults to empty.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    username: String,
    email: String,
    password: String,
    bio: String,
}

#[derive(Debug, Clone)]
pub enum SignupRequestError {
    MissingFields,
    InvalidEmailFormat,
    BioTooLong,
}

impl std::fmt::Display for SignupRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupRequestError::MissingFields => write!(f, "All required fields are missing"),
            SignupRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            SignupRequestError::BioTooLong => {
                write!(f, "Bio must be 500 characters or less")
            }
        }
    }
}

impl std::error::Error for SignupRequestError {}

impl SignupRequest {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
        bio: Option<String>,
    ) -> Result<Self, SignupRequestError> {
        let username = non_empty(username).ok_or(SignupRequestError::MissingFields)?;
        let email = non_empty(email).ok_or(SignupRequestError::MissingFields)?;
        let password = non_empty(password).ok_or(SignupRequestError::MissingFields)?;

        if !EmailAddress::is_valid(&email) {
            return Err(SignupRequestError::InvalidEmailFormat);
        }

        let bio = bio.unwrap_or_default();
        if bio.chars().count() > MAX_BIO_LEN {
            return Err(SignupRequestError::BioTooLong);
        }

        Ok(Self {
            username,
            email: email.to_lowercase(),
            password,
            bio,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ====================== Signup Error =============================
#[derive(Debug, Clone)]
pub enum SignupError {
    Conflict,
    HashingFailed(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupError::Conflict => write!(f, "Email or username already in use"),
            SignupError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            SignupError::QueryError(msg) => write!(f, "Query error: {}", msg),
            SignupError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for SignupError {}

// ====================== Signup Response ==========================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupUserInfo {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupUserResponse {
    pub user: SignupUserInfo,
}

// ====================== Signup Use Case ==========================
#[async_trait]
pub trait ISignupUserUseCase: Send + Sync {
    async fn execute(&self, request: SignupRequest) -> Result<SignupUserResponse, SignupError>;
}

#[derive(Debug, Clone)]
pub struct SignupUserUseCase<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: H,
}

impl<Q, R, H> SignupUserUseCase<Q, R, H>
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
impl<Q, R, H> ISignupUserUseCase for SignupUserUseCase<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, request: SignupRequest) -> Result<SignupUserResponse, SignupError> {
        let taken = self
            .query
            .email_or_username_taken(request.email(), request.username())
            .await
            .map_err(SignupError::QueryError)?;

        if taken {
            return Err(SignupError::Conflict);
        }

        let password_hash = self
            .hasher
            .hash_password(request.password())
            .map_err(SignupError::HashingFailed)?;

        let created = self
            .repository
            .create_user(CreateUserData {
                username: request.username().to_string(),
                email: request.email().to_string(),
                password_hash,
                bio: request.bio().to_string(),
            })
            .await
            .map_err(|e| match e {
                // The unique index can still race the pre-check
                UserRepositoryError::UserAlreadyExists => SignupError::Conflict,
                other => SignupError::RepositoryError(other.to_string()),
            })?;

        Ok(SignupUserResponse {
            user: SignupUserInfo {
                id: created.id,
                username: created.username,
                email: created.email,
                bio: created.bio,
            },
        })
    }
}
