use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPostSummary;
use crate::modules::blog::application::ports::outgoing::{BlogPostListFilter, BlogQueryError};
use crate::shared::content::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetBlogPostsError {
    fn from(err: BlogQueryError) -> Self {
        GetBlogPostsError::QueryFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Shared by the admin listing and the public listing; the public
/// route pins the status filter to published.
#[async_trait]
pub trait GetBlogPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BlogPostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogPostSummary>, GetBlogPostsError>;
}
