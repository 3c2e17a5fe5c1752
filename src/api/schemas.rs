// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope: payload fields are flattened next to
/// `success` and the optional `message`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,

    /// Optional human-readable confirmation
    #[schema(example = "Login successful")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Response payload, flattened into the envelope
    #[serde(flatten)]
    pub data: T,
}

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Invalid email or password")]
    pub message: String,
}
