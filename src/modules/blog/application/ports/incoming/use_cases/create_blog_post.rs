use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::BlogRepositoryError;
use crate::shared::content::{MissingFields, PublicationStatus, TagsInput};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw create payload. Presence is checked by the service so every
/// missing field can be reported at once.
#[derive(Debug, Clone, Default)]
pub struct CreateBlogPostCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<TagsInput>,
    pub status: Option<PublicationStatus>,
    pub thumbnail: Option<String>,
    pub read_time: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBlogPostError {
    #[error("{0}")]
    MissingFields(MissingFields),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<BlogRepositoryError> for CreateBlogPostError {
    fn from(err: BlogRepositoryError) -> Self {
        CreateBlogPostError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateBlogPostUseCase: Send + Sync {
    async fn execute(&self, command: CreateBlogPostCommand)
        -> Result<BlogPost, CreateBlogPostError>;
}
