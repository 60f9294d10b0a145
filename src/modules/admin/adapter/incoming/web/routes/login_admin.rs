use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::ports::incoming::use_cases::LoginAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginAdminRequest {
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginAdminResponse {
    /// When the session cookie stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Admin login
///
/// Checks the admin password and sets the `admin_token` session cookie.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginAdminRequest,
    responses(
        (status = 200, description = "Session issued", body = inline(SuccessResponse<LoginAdminResponse>)),
        (status = 400, description = "Password missing", body = ErrorResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.login.execute(req.into_inner().password).await {
        Ok(session) => {
            info!("Admin logged in");
            ApiResponse::success_with_cookie(
                LoginAdminResponse {
                    expires_at: session.expires_at,
                },
                data.admin_cookie.session_cookie(session.token),
            )
        }

        Err(LoginAdminError::PasswordRequired) => {
            ApiResponse::bad_request("PASSWORD_REQUIRED", "Password is required")
        }

        Err(LoginAdminError::InvalidPassword) => {
            ApiResponse::unauthorized("INVALID_PASSWORD", "Invalid password")
        }

        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
