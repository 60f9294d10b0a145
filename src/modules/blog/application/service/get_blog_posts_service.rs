use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPostSummary;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsError, GetBlogPostsUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogPostListFilter, BlogQuery};
use crate::shared::content::{PageRequest, PageResult};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetBlogPostsService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogPostsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostsUseCase for GetBlogPostsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: BlogPostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogPostSummary>, GetBlogPostsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(GetBlogPostsError::from)
    }
}
