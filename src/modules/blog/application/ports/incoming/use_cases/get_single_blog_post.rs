use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::BlogQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleBlogPostError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetSingleBlogPostError {
    fn from(err: BlogQueryError) -> Self {
        match err {
            BlogQueryError::NotFound => GetSingleBlogPostError::NotFound,
            other => GetSingleBlogPostError::QueryFailed(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetSingleBlogPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<BlogPost, GetSingleBlogPostError>;
}
