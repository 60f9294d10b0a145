use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "+62 812 3456 7890")]
    pub phone: Option<String>,
    #[schema(example = "I'd like to know more about your courses.")]
    pub message: Option<String>,
}

impl From<SubmitContactRequest> for SubmitContactCommand {
    fn from(req: SubmitContactRequest) -> Self {
        SubmitContactCommand {
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactSubmittedResponse {
    #[schema(example = "Contact form submitted successfully")]
    pub message: String,
}

/// Contact form
///
/// Validates the submission and forwards it to the site inbox.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Submission accepted", body = inline(SuccessResponse<ContactSubmittedResponse>)),
        (status = 400, description = "Missing field, bad email or bad phone", body = ErrorResponse),
        (status = 500, description = "Delivery failed", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(req.into_inner().into()).await {
        Ok(()) => ApiResponse::created(ContactSubmittedResponse {
            message: "Contact form submitted successfully".to_string(),
        }),

        Err(SubmitContactError::MissingFields(missing)) => {
            ApiResponse::bad_request("MISSING_REQUIRED_FIELDS", missing.to_string())
        }

        Err(SubmitContactError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email address")
        }

        Err(SubmitContactError::InvalidPhone) => {
            ApiResponse::bad_request("INVALID_PHONE", "Invalid phone number")
        }

        Err(SubmitContactError::DeliveryFailed(e)) => {
            error!("Contact form delivery failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
