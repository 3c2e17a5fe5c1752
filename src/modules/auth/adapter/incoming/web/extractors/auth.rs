use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::cookies::{RESET_COOKIE, SESSION_COOKIE};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenError, TokenProvider, PURPOSE_RESET, PURPOSE_SESSION,
};
use crate::shared::api::ApiResponse;

/// A caller holding a live session token.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
}

/// A caller who verified an OTP and may reset their password.
#[derive(Debug, Clone)]
pub struct ResetSession {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

// The session token is accepted from the cookie or a Bearer header; the
// reset token only ever travels in its cookie.
fn extract_session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for SessionUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let provider = match req
            .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_session_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Access Denied: No Token Provided",
                ))));
            }
        };

        match provider.verify_token(&token) {
            Ok(claims) if claims.purpose == PURPOSE_SESSION => {
                ready(Ok(SessionUser {
                    user_id: claims.sub,
                }))
            }
            Ok(_) | Err(TokenError::Invalid) | Err(TokenError::GenerationFailed(_)) => {
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Invalid Token. Please log in again.",
                ))))
            }
            Err(TokenError::Expired) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Token Expired. Please log in again.",
            )))),
        }
    }
}

impl FromRequest for ResetSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let provider = match req
            .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match req.cookie(RESET_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Access Denied",
                ))));
            }
        };

        match provider.verify_token(&token) {
            Ok(claims) if claims.purpose == PURPOSE_RESET => {
                ready(Ok(ResetSession {
                    user_id: claims.sub,
                }))
            }
            // A session token presented here is just as unauthorized as a
            // garbage one
            Ok(_) | Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Invalid or expired reset session",
            )))),
        }
    }
}
