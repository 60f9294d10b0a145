// src/modules/blog/application/ports/outgoing/blog_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::{BlogPost, BlogPostSummary};
use crate::shared::content::{PageRequest, PageResult, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostListFilter {
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Case-insensitive match on title and excerpt
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Any status; admin reads
    async fn get_by_id(&self, post_id: Uuid) -> Result<BlogPost, BlogQueryError>;

    /// Drafts answer NotFound
    async fn get_published_by_id(&self, post_id: Uuid) -> Result<BlogPost, BlogQueryError>;

    /// Newest first
    async fn list(
        &self,
        filter: BlogPostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogPostSummary>, BlogQueryError>;

    /// Distinct categories of published posts, sorted
    async fn published_categories(&self) -> Result<Vec<String>, BlogQueryError>;
}
