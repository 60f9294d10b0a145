use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetSingleBlogPostError, GetSingleBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogQuery;

pub struct GetSingleBlogPostService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetSingleBlogPostService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleBlogPostUseCase for GetSingleBlogPostService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<BlogPost, GetSingleBlogPostError> {
        self.query
            .get_by_id(post_id)
            .await
            .map_err(GetSingleBlogPostError::from)
    }
}
