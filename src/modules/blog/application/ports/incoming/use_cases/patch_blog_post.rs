use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::{BlogRepositoryError, PatchBlogPostData};
use crate::shared::content::InvalidField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchBlogPostError {
    #[error("{0}")]
    InvalidField(InvalidField),

    #[error("Blog post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<InvalidField> for PatchBlogPostError {
    fn from(err: InvalidField) -> Self {
        PatchBlogPostError::InvalidField(err)
    }
}

impl From<BlogRepositoryError> for PatchBlogPostError {
    fn from(err: BlogRepositoryError) -> Self {
        match err {
            BlogRepositoryError::NotFound => PatchBlogPostError::NotFound,
            BlogRepositoryError::DatabaseError(msg)
            | BlogRepositoryError::SerializationError(msg) => {
                PatchBlogPostError::RepositoryError(msg)
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
pub trait PatchBlogPostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        data: PatchBlogPostData,
    ) -> Result<BlogPost, PatchBlogPostError>;
}
