use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::incoming::use_cases::{
    PatchJobError, PatchJobUseCase,
};
use crate::modules::job::application::ports::outgoing::{JobRepository, PatchJobPostingData};
use crate::shared::content::InvalidField;

pub struct PatchJobService<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> PatchJobService<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

fn sanitize(data: PatchJobPostingData) -> Result<PatchJobPostingData, InvalidField> {
    Ok(PatchJobPostingData {
        title: data.title.require_text("title")?,
        company: data.company.require_text("company")?,
        location: data.location.require_text("location")?,
        salary: data.salary.require_present("salary")?,
        job_type: data.job_type.require_present("type")?,
        sector: data.sector.require_present("sector")?,
        apply_start_date: data.apply_start_date.require_present("applyStartDate")?,
        apply_end_date: data.apply_end_date.require_present("applyEndDate")?,
        description: data.description.require_text("description")?,
        eligibility: data.eligibility.require_text("eligibility")?,
        status: data.status.require_present("status")?,
    })
}

#[async_trait]
impl<R> PatchJobUseCase for PatchJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        job_id: Uuid,
        data: PatchJobPostingData,
    ) -> Result<JobPosting, PatchJobError> {
        let data = sanitize(data)?;

        let job = self.job_repository.patch_job(job_id, data).await?;
        info!(%job_id, "Job posting updated");

        Ok(job)
    }
}
