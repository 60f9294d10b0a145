use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::outgoing::{JobRepositoryError, PatchJobPostingData};
use crate::shared::content::InvalidField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchJobError {
    #[error("{0}")]
    InvalidField(InvalidField),

    #[error("Job posting not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<InvalidField> for PatchJobError {
    fn from(err: InvalidField) -> Self {
        PatchJobError::InvalidField(err)
    }
}

impl From<JobRepositoryError> for PatchJobError {
    fn from(err: JobRepositoryError) -> Self {
        match err {
            JobRepositoryError::NotFound => PatchJobError::NotFound,
            JobRepositoryError::DatabaseError(msg) | JobRepositoryError::SerializationError(msg) => {
                PatchJobError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchJobUseCase: Send + Sync {
    async fn execute(
        &self,
        job_id: Uuid,
        data: PatchJobPostingData,
    ) -> Result<JobPosting, PatchJobError>;
}
