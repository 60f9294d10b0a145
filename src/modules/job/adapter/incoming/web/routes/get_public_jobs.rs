use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::job::adapter::incoming::web::routes::JobListQuery;
use crate::modules::job::application::ports::incoming::use_cases::GetJobsError;
use crate::shared::api::ApiResponse;
use crate::shared::content::PublicationStatus;
use crate::AppState;

#[get("/api/jobs")]
pub async fn get_public_jobs_handler(
    query: web::Query<JobListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (mut filter, page) = query.into_inner().into_parts();
    filter.status = Some(PublicationStatus::Published);

    match data.job.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetJobsError::QueryFailed(e)) => {
            error!("Failed to list public job postings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
