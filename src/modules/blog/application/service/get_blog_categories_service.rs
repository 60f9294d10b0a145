use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogCategoriesError, GetBlogCategoriesUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogQuery;

pub struct GetBlogCategoriesService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogCategoriesService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogCategoriesUseCase for GetBlogCategoriesService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetBlogCategoriesError> {
        Ok(self.query.published_categories().await?)
    }
}
