use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use tracing::{debug, error};
use uuid::Uuid;

use crate::modules::admin::application::ports::incoming::use_cases::VerifyAdminSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::session_cookie::{extract_admin_token, ADMIN_SESSION_COOKIE};

/// A request carrying a live admin session.
///
/// Taking this as a handler argument gates the route.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_admin_token(req);

        Box::pin(async move {
            let Some(state) = state else {
                error!("AppState missing while checking admin session");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_ADMIN_SESSION",
                    "Admin session required",
                )));
            };

            match state.admin.verify_session.execute(&token).await {
                Ok(session) => Ok(AdminSession {
                    session_id: session.session_id,
                    expires_at: session.expires_at,
                }),

                Err(VerifyAdminSessionError::StoreUnavailable(e)) => {
                    error!(error = %e, "Revocation store unavailable during session check");
                    Err(create_api_error(ApiResponse::internal_error()))
                }

                Err(e) => {
                    debug!(error = %e, "Admin session rejected");
                    Err(create_api_error(ApiResponse::unauthorized_clearing_cookie(
                        "INVALID_ADMIN_SESSION",
                        "Session is invalid or expired",
                        ADMIN_SESSION_COOKIE,
                    )))
                }
            }
        })
    }
}
