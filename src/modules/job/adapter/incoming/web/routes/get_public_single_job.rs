use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::job::application::ports::incoming::use_cases::GetPublicSingleJobError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[get("/api/jobs/{job_id}")]
pub async fn get_public_single_job_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = match parse_record_id(&path, "INVALID_JOB_ID", "Invalid job ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.job.get_public_single.execute(job_id).await {
        Ok(job) => ApiResponse::success(job),

        Err(GetPublicSingleJobError::NotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job posting not found")
        }

        Err(GetPublicSingleJobError::QueryFailed(e)) => {
            error!("Failed to load public job posting {}: {}", job_id, e);
            ApiResponse::internal_error()
        }
    }
}
