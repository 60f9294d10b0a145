use async_trait::async_trait;
use tracing::info;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobCommand, CreateJobError, CreateJobUseCase,
};
use crate::modules::job::application::ports::outgoing::{CreateJobPostingData, JobRepository};
use crate::shared::content::RequiredFields;

pub struct CreateJobService<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> CreateJobService<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

fn validate(command: CreateJobCommand) -> Result<CreateJobPostingData, CreateJobError> {
    let mut required = RequiredFields::new();

    let data = CreateJobPostingData {
        title: required.text("title", command.title),
        company: required.text("company", command.company),
        location: required.text("location", command.location),
        salary: required.value("salary", command.salary),
        job_type: required.value("type", command.job_type),
        sector: required.value("sector", command.sector),
        apply_start_date: required
            .value("applyStartDate", command.apply_start_date)
            .into_inner(),
        apply_end_date: required
            .value("applyEndDate", command.apply_end_date)
            .into_inner(),
        description: required.text("description", command.description),
        eligibility: required.text("eligibility", command.eligibility),
        status: command.status.unwrap_or_default(),
    };

    required.finish().map_err(CreateJobError::MissingFields)?;

    Ok(data)
}

#[async_trait]
impl<R> CreateJobUseCase for CreateJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, command: CreateJobCommand) -> Result<JobPosting, CreateJobError> {
        let data = validate(command)?;

        let job = self.job_repository.create_job(data).await?;
        info!(job_id = %job.id, job_type = %job.job_type, "Job posting created");

        Ok(job)
    }
}
