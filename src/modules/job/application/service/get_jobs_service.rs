use async_trait::async_trait;

use crate::modules::job::application::domain::entities::JobPostingSummary;
use crate::modules::job::application::ports::incoming::use_cases::{GetJobsError, GetJobsUseCase};
use crate::modules::job::application::ports::outgoing::{JobListFilter, JobQuery};
use crate::shared::content::{PageRequest, PageResult};

pub struct GetJobsService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> GetJobsService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetJobsUseCase for GetJobsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: JobListFilter,
        page: PageRequest,
    ) -> Result<PageResult<JobPostingSummary>, GetJobsError> {
        Ok(self.query.list(filter, page).await?)
    }
}
