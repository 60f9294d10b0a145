use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::job::application::ports::incoming::use_cases::{
    DeleteJobError, DeleteJobUseCase,
};
use crate::modules::job::application::ports::outgoing::JobRepository;

pub struct DeleteJobService<R>
where
    R: JobRepository,
{
    job_repository: R,
}

impl<R> DeleteJobService<R>
where
    R: JobRepository,
{
    pub fn new(job_repository: R) -> Self {
        Self { job_repository }
    }
}

#[async_trait]
impl<R> DeleteJobUseCase for DeleteJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, job_id: Uuid) -> Result<(), DeleteJobError> {
        self.job_repository.delete_job(job_id).await?;
        info!(%job_id, "Job posting deleted");
        Ok(())
    }
}
