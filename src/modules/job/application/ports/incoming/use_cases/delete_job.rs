use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::ports::outgoing::JobRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteJobError {
    #[error("Job posting not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<JobRepositoryError> for DeleteJobError {
    fn from(err: JobRepositoryError) -> Self {
        match err {
            JobRepositoryError::NotFound => DeleteJobError::NotFound,
            JobRepositoryError::DatabaseError(msg) | JobRepositoryError::SerializationError(msg) => {
                DeleteJobError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteJobUseCase: Send + Sync {
    async fn execute(&self, job_id: Uuid) -> Result<(), DeleteJobError>;
}
