use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, PURPOSE_RESET, PURPOSE_SESSION,
};

/// Token provider with a canned `verify_token` outcome. Tests drive the
/// extractors through it without signing real JWTs.
pub struct StubTokenProvider {
    verify_result: Result<TokenClaims, TokenError>,
}

impl StubTokenProvider {
    pub fn session_ok(user_id: Uuid) -> Self {
        Self {
            verify_result: Ok(TokenClaims {
                sub: user_id,
                email: Some("user@example.com".to_string()),
                purpose: PURPOSE_SESSION.to_string(),
                exp: (Utc::now() + Duration::days(7)).timestamp(),
            }),
        }
    }

    pub fn reset_ok(user_id: Uuid) -> Self {
        Self {
            verify_result: Ok(TokenClaims {
                sub: user_id,
                email: None,
                purpose: PURPOSE_RESET.to_string(),
                exp: (Utc::now() + Duration::hours(1)).timestamp(),
            }),
        }
    }

    pub fn expired() -> Self {
        Self {
            verify_result: Err(TokenError::Expired),
        }
    }

    pub fn invalid() -> Self {
        Self {
            verify_result: Err(TokenError::Invalid),
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn issue_session_token(&self, _user_id: Uuid, _email: &str) -> Result<String, TokenError> {
        Ok("stub.session.token".to_string())
    }

    fn issue_reset_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        Ok("stub.reset.token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_result.clone()
    }
}

pub fn token_provider_data(
    provider: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(provider) as Arc<dyn TokenProvider + Send + Sync>)
}
