use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, PURPOSE_RESET, PURPOSE_SESSION,
};

/// Wire shape of the claims
#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    purpose: String, // Either "session" or "reset"
    exp: i64,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn sign(&self, claims: &JwtClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_session_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.session_token_expiry);
        self.sign(&JwtClaims {
            sub: user_id,
            email: Some(email.to_string()),
            purpose: PURPOSE_SESSION.to_string(),
            exp: expiration.timestamp(),
        })
    }

    fn issue_reset_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.reset_token_expiry);
        self.sign(&JwtClaims {
            sub: user_id,
            email: None,
            purpose: PURPOSE_RESET.to_string(),
            exp: expiration.timestamp(),
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // Enforced manually for a distinct error
        validation.required_spec_claims.clear();

        let decoded = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            sub: decoded.claims.sub,
            email: decoded.claims.email,
            purpose: decoded.claims.purpose,
            exp: decoded.claims.exp,
        })
    }
}
