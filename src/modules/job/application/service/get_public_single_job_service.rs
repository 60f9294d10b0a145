use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetPublicSingleJobError, GetPublicSingleJobUseCase,
};
use crate::modules::job::application::ports::outgoing::JobQuery;

pub struct GetPublicSingleJobService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleJobService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSingleJobUseCase for GetPublicSingleJobService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self, job_id: Uuid) -> Result<JobPosting, GetPublicSingleJobError> {
        Ok(self.query.get_published_by_id(job_id).await?)
    }
}
