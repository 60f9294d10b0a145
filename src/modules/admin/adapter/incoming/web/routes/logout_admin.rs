use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::admin::adapter::incoming::web::session_cookie::extract_admin_token;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutAdminResponse {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Admin logout
///
/// Revokes the presented session and clears the cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutAdminResponse>))
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = extract_admin_token(&req);

    if let Err(e) = data.admin.logout.execute(token).await {
        // The cookie is cleared regardless
        error!(error = %e, "Session revocation failed during logout");
    }

    ApiResponse::success_with_cookie(
        LogoutAdminResponse {
            message: "Logged out successfully".to_string(),
        },
        data.admin_cookie.removal_cookie(),
    )
}
