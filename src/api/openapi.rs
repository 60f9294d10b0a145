use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes::{
    LoginAdminRequest, LoginAdminResponse, LogoutAdminResponse, VerifyAdminTokenResponse,
};
use crate::modules::contact::adapter::incoming::web::routes::{
    ContactSubmittedResponse, SubmitContactRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus CMS API",
        version = "1.0.0",
        description = "Admin and public endpoints of the campus content management system"
    ),
    paths(
        // Admin session
        crate::modules::admin::adapter::incoming::web::routes::login_admin_handler,
        crate::modules::admin::adapter::incoming::web::routes::logout_admin_handler,
        crate::modules::admin::adapter::incoming::web::routes::verify_admin_token_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            SuccessResponse<LoginAdminResponse>,
            ErrorResponse,
            ErrorDetail,
            LoginAdminRequest,
            LoginAdminResponse,
            LogoutAdminResponse,
            VerifyAdminTokenResponse,
            SubmitContactRequest,
            ContactSubmittedResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin", description = "Admin session endpoints"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AdminSession",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "admin_token",
                    "Session cookie set by POST /api/admin/login",
                ))),
            )
        }
    }
}
