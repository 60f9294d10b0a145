use async_trait::async_trait;
use tracing::info;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostCommand, CreateBlogPostError, CreateBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogRepository, CreateBlogPostData};
use crate::shared::content::RequiredFields;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateBlogPostService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> CreateBlogPostService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

fn validate(command: CreateBlogPostCommand) -> Result<CreateBlogPostData, CreateBlogPostError> {
    let mut required = RequiredFields::new();

    let data = CreateBlogPostData {
        title: required.text("title", command.title),
        content: required.text("content", command.content),
        excerpt: required.text("excerpt", command.excerpt),
        author: required.text("author", command.author),
        category: required.text("category", command.category),
        tags: command.tags.unwrap_or_default().into_tags(),
        status: command.status.unwrap_or_default(),
        thumbnail: required.text("thumbnail", command.thumbnail),
        read_time: required.text("readTime", command.read_time),
    };

    required
        .finish()
        .map_err(CreateBlogPostError::MissingFields)?;

    Ok(data)
}

#[async_trait]
impl<R> CreateBlogPostUseCase for CreateBlogPostService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateBlogPostCommand,
    ) -> Result<BlogPost, CreateBlogPostError> {
        let data = validate(command)?;

        let post = self.blog_repository.create_blog_post(data).await?;
        info!(post_id = %post.id, status = %post.status, "Blog post created");

        Ok(post)
    }
}
