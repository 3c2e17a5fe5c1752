// src/shared/api/json_config.rs
use actix_web::error::InternalError;
use actix_web::web::JsonConfig;
use tracing::debug;

use crate::shared::api::ApiResponse;

/// Malformed request bodies get the standard envelope instead of actix's
/// plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        debug!(error = %message, "Rejected request body");
        InternalError::from_response(err, ApiResponse::bad_request(&message)).into()
    })
}
