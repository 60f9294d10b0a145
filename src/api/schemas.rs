//! OpenAPI shapes of the response envelope built by `shared::api::ApiResponse`.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// `code` is stable and meant for clients; `message` is for humans.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "MISSING_REQUIRED_FIELDS")]
    pub code: String,

    #[schema(example = "Missing required fields: title, author")]
    pub message: String,
}
