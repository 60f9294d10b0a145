use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetSingleJobError, GetSingleJobUseCase,
};
use crate::modules::job::application::ports::outgoing::JobQuery;

pub struct GetSingleJobService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> GetSingleJobService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleJobUseCase for GetSingleJobService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self, job_id: Uuid) -> Result<JobPosting, GetSingleJobError> {
        Ok(self.query.get_by_id(job_id).await?)
    }
}
