use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetPublicSingleBlogPostError, GetPublicSingleBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogQuery;

pub struct GetPublicSingleBlogPostService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleBlogPostService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSingleBlogPostUseCase for GetPublicSingleBlogPostService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<BlogPost, GetPublicSingleBlogPostError> {
        self.query
            .get_published_by_id(post_id)
            .await
            .map_err(GetPublicSingleBlogPostError::from)
    }
}
