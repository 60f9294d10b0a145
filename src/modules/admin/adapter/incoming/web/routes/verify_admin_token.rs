use actix_web::{post, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAdminTokenResponse {
    #[schema(example = true)]
    pub valid: bool,
    pub expires_at: DateTime<Utc>,
}

/// Verify admin session
///
/// Lets the front end check whether its session cookie is still live.
#[utoipa::path(
    post,
    path = "/api/admin/verify-token",
    tag = "admin",
    responses(
        (status = 200, description = "Session is live", body = inline(SuccessResponse<VerifyAdminTokenResponse>)),
        (status = 401, description = "Missing, invalid or revoked session", body = ErrorResponse)
    ),
    security(("AdminSession" = []))
)]
#[post("/api/admin/verify-token")]
pub async fn verify_admin_token_handler(admin: AdminSession) -> impl Responder {
    ApiResponse::success(VerifyAdminTokenResponse {
        valid: true,
        expires_at: admin.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::admin_helper::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn live_session_is_valid() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(verify_admin_token_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/verify-token")
            .cookie(admin_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["valid"], true);
        assert!(body["data"]["expiresAt"].is_string());
    }

    #[actix_web::test]
    async fn unknown_token_is_401() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(verify_admin_token_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/verify-token")
            .insert_header(("Authorization", "Bearer not-the-admin-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ADMIN_SESSION");
    }
}
