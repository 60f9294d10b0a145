use async_trait::async_trait;

use crate::modules::job::application::domain::entities::JobPostingSummary;
use crate::modules::job::application::ports::outgoing::{JobListFilter, JobQueryError};
use crate::shared::content::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetJobsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<JobQueryError> for GetJobsError {
    fn from(err: JobQueryError) -> Self {
        GetJobsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetJobsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: JobListFilter,
        page: PageRequest,
    ) -> Result<PageResult<JobPostingSummary>, GetJobsError>;
}
