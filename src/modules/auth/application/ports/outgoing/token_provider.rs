use uuid::Uuid;

/// Scope baked into every token; verification rejects a token presented
/// for the wrong purpose.
pub const PURPOSE_SESSION: &str = "session";
pub const PURPOSE_RESET: &str = "reset";

#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub email: Option<String>,
    pub purpose: String,
    pub exp: i64,
}

/// Expired and malformed tokens are distinct on purpose: the two cases
/// produce different user-facing messages.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    Expired,
    Invalid,
    GenerationFailed(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Expired => write!(f, "Token has expired"),
            TokenError::Invalid => write!(f, "Token is invalid"),
            TokenError::GenerationFailed(msg) => write!(f, "Token generation failed: {msg}"),
        }
    }
}

impl std::error::Error for TokenError {}

pub trait TokenProvider: Send + Sync {
    /// 7-day session token; subject is the user id, email rides along.
    fn issue_session_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError>;

    /// 1-hour token that authorizes only the password reset.
    fn issue_reset_token(&self, user_id: Uuid) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
