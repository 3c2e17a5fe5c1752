// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Uniform JSON envelope: `success` plus an optional `message`, with any
/// payload fields flattened alongside them. Error responses never carry
/// payload fields.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn success_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        })
    }

    pub fn created_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn ok_message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            message: Some(message.to_string()),
            data: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            message: Some(message.to_string()),
            data: None,
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// 500 with the underlying message attached; callers pass the detail
    /// only outside production.
    pub fn internal_error_detailed(detail: Option<&str>) -> HttpResponse {
        match detail {
            Some(d) => Self::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Internal Server Error: {d}"),
            ),
            None => Self::internal_error(),
        }
    }
}
