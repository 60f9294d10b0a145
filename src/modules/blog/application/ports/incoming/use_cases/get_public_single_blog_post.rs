use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::BlogQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicSingleBlogPostError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetPublicSingleBlogPostError {
    fn from(err: BlogQueryError) -> Self {
        match err {
            BlogQueryError::NotFound => GetPublicSingleBlogPostError::NotFound,
            other => GetPublicSingleBlogPostError::QueryFailed(other.to_string()),
        }
    }
}

/// Drafts are reported as NotFound so their existence is not leaked.
#[async_trait]
pub trait GetPublicSingleBlogPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<BlogPost, GetPublicSingleBlogPostError>;
}
