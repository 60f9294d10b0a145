use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::job::application::domain::entities::{JobSector, JobType};
use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobCommand, CreateJobError,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::{FlexibleDate, PublicationStatus};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub sector: Option<JobSector>,
    pub apply_start_date: Option<FlexibleDate>,
    pub apply_end_date: Option<FlexibleDate>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub status: Option<PublicationStatus>,
}

impl From<CreateJobRequest> for CreateJobCommand {
    fn from(req: CreateJobRequest) -> Self {
        CreateJobCommand {
            title: req.title,
            company: req.company,
            location: req.location,
            salary: req.salary,
            job_type: req.job_type,
            sector: req.sector,
            apply_start_date: req.apply_start_date,
            apply_end_date: req.apply_end_date,
            description: req.description,
            eligibility: req.eligibility,
            status: req.status,
        }
    }
}

#[post("/api/admin/jobs")]
pub async fn create_job_handler(
    _admin: AdminSession,
    req: web::Json<CreateJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.create.execute(req.into_inner().into()).await {
        Ok(job) => ApiResponse::created(job),

        Err(CreateJobError::MissingFields(missing)) => {
            ApiResponse::bad_request("MISSING_REQUIRED_FIELDS", missing.to_string())
        }

        Err(CreateJobError::RepositoryError(e)) => {
            error!("Repository error creating job posting: {}", e);
            ApiResponse::internal_error()
        }
    }
}
