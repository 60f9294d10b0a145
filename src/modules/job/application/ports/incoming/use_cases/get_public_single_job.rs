use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::outgoing::JobQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicSingleJobError {
    #[error("Job posting not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<JobQueryError> for GetPublicSingleJobError {
    fn from(err: JobQueryError) -> Self {
        match err {
            JobQueryError::NotFound => GetPublicSingleJobError::NotFound,
            other => GetPublicSingleJobError::QueryFailed(other.to_string()),
        }
    }
}

/// Drafts resolve as NotFound.
#[async_trait]
pub trait GetPublicSingleJobUseCase: Send + Sync {
    async fn execute(&self, job_id: Uuid) -> Result<JobPosting, GetPublicSingleJobError>;
}
