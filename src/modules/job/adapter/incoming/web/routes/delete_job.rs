use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::job::application::ports::incoming::use_cases::DeleteJobError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[delete("/api/admin/jobs/{job_id}")]
pub async fn delete_job_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = match parse_record_id(&path, "INVALID_JOB_ID", "Invalid job ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.job.delete.execute(job_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteJobError::NotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job posting not found")
        }

        Err(DeleteJobError::RepositoryError(e)) => {
            error!("Repository error deleting job posting {}: {}", job_id, e);
            ApiResponse::internal_error()
        }
    }
}
