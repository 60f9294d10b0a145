use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::BlogRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteBlogPostError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<BlogRepositoryError> for DeleteBlogPostError {
    fn from(err: BlogRepositoryError) -> Self {
        match err {
            BlogRepositoryError::NotFound => DeleteBlogPostError::NotFound,
            BlogRepositoryError::DatabaseError(msg)
            | BlogRepositoryError::SerializationError(msg) => {
                DeleteBlogPostError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Hard delete; the row is gone afterwards.
#[async_trait]
pub trait DeleteBlogPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<(), DeleteBlogPostError>;
}
