use async_trait::async_trait;

use crate::modules::job::application::domain::entities::{JobPosting, JobSector, JobType};
use crate::modules::job::application::ports::outgoing::JobRepositoryError;
use crate::shared::content::{FlexibleDate, MissingFields, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateJobCommand {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub job_type: Option<JobType>,
    pub sector: Option<JobSector>,
    pub apply_start_date: Option<FlexibleDate>,
    pub apply_end_date: Option<FlexibleDate>,
    pub description: Option<String>,
    pub eligibility: Option<String>,
    pub status: Option<PublicationStatus>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateJobError {
    #[error("{0}")]
    MissingFields(MissingFields),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<JobRepositoryError> for CreateJobError {
    fn from(err: JobRepositoryError) -> Self {
        CreateJobError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateJobUseCase: Send + Sync {
    async fn execute(&self, command: CreateJobCommand) -> Result<JobPosting, CreateJobError>;
}
