use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::outgoing::JobQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleJobError {
    #[error("Job posting not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<JobQueryError> for GetSingleJobError {
    fn from(err: JobQueryError) -> Self {
        match err {
            JobQueryError::NotFound => GetSingleJobError::NotFound,
            other => GetSingleJobError::QueryFailed(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetSingleJobUseCase: Send + Sync {
    async fn execute(&self, job_id: Uuid) -> Result<JobPosting, GetSingleJobError>;
}
