use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{
    DeleteBlogPostError, DeleteBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogRepository;

pub struct DeleteBlogPostService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> DeleteBlogPostService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

#[async_trait]
impl<R> DeleteBlogPostUseCase for DeleteBlogPostService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<(), DeleteBlogPostError> {
        self.blog_repository.delete_blog_post(post_id).await?;
        info!(%post_id, "Blog post deleted");
        Ok(())
    }
}
