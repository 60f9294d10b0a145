// src/modules/blog/application/ports/outgoing/blog_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::content::{PatchField, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated, trimmed input for a new post.
#[derive(Debug, Clone)]
pub struct CreateBlogPostData {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,

    /// Stored as JSONB in DB (array of strings)
    pub tags: Vec<String>,

    pub status: PublicationStatus,
    pub thumbnail: String,
    pub read_time: String,
}

/// Patch semantics:
/// - Unset => keep, Value => replace
/// - tags: Value(vec) => replace whole array (no merge)
/// - Null never reaches the repository; every column is NOT NULL
#[derive(Debug, Clone, Default)]
pub struct PatchBlogPostData {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
    pub excerpt: PatchField<String>,
    pub author: PatchField<String>,
    pub category: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub status: PatchField<PublicationStatus>,
    pub thumbnail: PatchField<String>,
    pub read_time: PatchField<String>,
}

impl PatchBlogPostData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.content.is_unset()
            && self.excerpt.is_unset()
            && self.author.is_unset()
            && self.category.is_unset()
            && self.tags.is_unset()
            && self.status.is_unset()
            && self.thumbnail.is_unset()
            && self.read_time.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create_blog_post(
        &self,
        data: CreateBlogPostData,
    ) -> Result<BlogPost, BlogRepositoryError>;

    /// An empty patch returns the stored post untouched.
    async fn patch_blog_post(
        &self,
        post_id: Uuid,
        data: PatchBlogPostData,
    ) -> Result<BlogPost, BlogRepositoryError>;

    async fn delete_blog_post(&self, post_id: Uuid) -> Result<(), BlogRepositoryError>;
}
