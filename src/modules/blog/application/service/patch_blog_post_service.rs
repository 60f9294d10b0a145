use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    PatchBlogPostError, PatchBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogRepository, PatchBlogPostData};
use crate::shared::content::{normalize_tags, InvalidField};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PatchBlogPostService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> PatchBlogPostService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

/// Rejects nulls and blanks on NOT NULL columns, trims text, normalizes tags.
fn sanitize(data: PatchBlogPostData) -> Result<PatchBlogPostData, InvalidField> {
    Ok(PatchBlogPostData {
        title: data.title.require_text("title")?,
        content: data.content.require_text("content")?,
        excerpt: data.excerpt.require_text("excerpt")?,
        author: data.author.require_text("author")?,
        category: data.category.require_text("category")?,
        tags: data.tags.require_present("tags")?.map(normalize_tags),
        status: data.status.require_present("status")?,
        thumbnail: data.thumbnail.require_text("thumbnail")?,
        read_time: data.read_time.require_text("readTime")?,
    })
}

#[async_trait]
impl<R> PatchBlogPostUseCase for PatchBlogPostService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        data: PatchBlogPostData,
    ) -> Result<BlogPost, PatchBlogPostError> {
        let data = sanitize(data)?;

        let post = self.blog_repository.patch_blog_post(post_id, data).await?;
        info!(%post_id, "Blog post updated");

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::modules::blog::application::ports::outgoing::{
        BlogRepositoryError, CreateBlogPostData,
    };
    use crate::shared::content::{PatchField, PublicationStatus};

    #[derive(Clone)]
    struct MockBlogRepo {
        result: Result<BlogPost, BlogRepositoryError>,
        received: Arc<Mutex<Option<PatchBlogPostData>>>,
    }

    impl MockBlogRepo {
        fn new(result: Result<BlogPost, BlogRepositoryError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepo {
        async fn create_blog_post(
            &self,
            _data: CreateBlogPostData,
        ) -> Result<BlogPost, BlogRepositoryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn patch_blog_post(
            &self,
            _post_id: Uuid,
            data: PatchBlogPostData,
        ) -> Result<BlogPost, BlogRepositoryError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn delete_blog_post(&self, _post_id: Uuid) -> Result<(), BlogRepositoryError> {
            unimplemented!("not needed for patch tests")
        }
    }

    fn sample_post(id: Uuid) -> BlogPost {
        BlogPost {
            id,
            title: "New Title".to_string(),
            content: "Body".to_string(),
            excerpt: "Short".to_string(),
            author: "Dina".to_string(),
            category: "Programming".to_string(),
            tags: vec!["rust".to_string()],
            status: PublicationStatus::Published,
            thumbnail: "t.png".to_string(),
            read_time: "5 min".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn trims_text_and_normalizes_tags_before_saving() {
        let id = Uuid::new_v4();
        let repo = MockBlogRepo::new(Ok(sample_post(id)));
        let service = PatchBlogPostService::new(repo.clone());

        let data = PatchBlogPostData {
            title: PatchField::Value("  New Title ".to_string()),
            tags: PatchField::Value(vec![" rust ".to_string(), "rust".to_string()]),
            status: PatchField::Value(PublicationStatus::Published),
            ..Default::default()
        };

        let post = service.execute(id, data).await.unwrap();
        assert_eq!(post.id, id);

        let received = repo.received.lock().unwrap().clone().unwrap();
        assert_eq!(received.title, PatchField::Value("New Title".to_string()));
        assert_eq!(received.tags, PatchField::Value(vec!["rust".to_string()]));
        assert!(received.content.is_unset());
    }

    #[tokio::test]
    async fn empty_patch_is_passed_through() {
        let id = Uuid::new_v4();
        let repo = MockBlogRepo::new(Ok(sample_post(id)));
        let service = PatchBlogPostService::new(repo.clone());

        service.execute(id, PatchBlogPostData::default()).await.unwrap();

        assert!(repo.received.lock().unwrap().clone().unwrap().is_empty());
    }

    // =====================================================
    // Validation
    // =====================================================

    #[tokio::test]
    async fn rejects_null_title_without_touching_repository() {
        let repo = MockBlogRepo::new(Ok(sample_post(Uuid::new_v4())));
        let service = PatchBlogPostService::new(repo.clone());

        let data = PatchBlogPostData {
            title: PatchField::Null,
            ..Default::default()
        };

        let err = service.execute(Uuid::new_v4(), data).await.unwrap_err();

        assert!(matches!(err, PatchBlogPostError::InvalidField(f) if f.field == "title"));
        assert!(repo.received.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_blank_read_time() {
        let repo = MockBlogRepo::new(Ok(sample_post(Uuid::new_v4())));
        let service = PatchBlogPostService::new(repo);

        let data = PatchBlogPostData {
            read_time: PatchField::Value("  ".to_string()),
            ..Default::default()
        };

        let err = service.execute(Uuid::new_v4(), data).await.unwrap_err();
        assert!(matches!(err, PatchBlogPostError::InvalidField(f) if f.field == "readTime"));
    }

    #[tokio::test]
    async fn rejects_null_tags() {
        let repo = MockBlogRepo::new(Ok(sample_post(Uuid::new_v4())));
        let service = PatchBlogPostService::new(repo);

        let data = PatchBlogPostData {
            tags: PatchField::Null,
            ..Default::default()
        };

        let err = service.execute(Uuid::new_v4(), data).await.unwrap_err();
        assert!(matches!(err, PatchBlogPostError::InvalidField(f) if f.field == "tags"));
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn maps_not_found() {
        let repo = MockBlogRepo::new(Err(BlogRepositoryError::NotFound));
        let service = PatchBlogPostService::new(repo);

        let err = service
            .execute(Uuid::new_v4(), PatchBlogPostData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PatchBlogPostError::NotFound));
    }

    #[tokio::test]
    async fn maps_serialization_error() {
        let repo = MockBlogRepo::new(Err(BlogRepositoryError::SerializationError(
            "bad json".to_string(),
        )));
        let service = PatchBlogPostService::new(repo);

        let err = service
            .execute(Uuid::new_v4(), PatchBlogPostData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PatchBlogPostError::RepositoryError(msg) if msg == "bad json"));
    }
}
