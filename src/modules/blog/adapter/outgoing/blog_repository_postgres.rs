use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::{
    BlogRepository, BlogRepositoryError, CreateBlogPostData, PatchBlogPostData,
};
use crate::shared::content::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn create_blog_post(
        &self,
        data: CreateBlogPostData,
    ) -> Result<BlogPost, BlogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            content: Set(data.content),
            excerpt: Set(data.excerpt),
            author: Set(data.author),
            category: Set(data.category),
            tags: Set(to_json(&data.tags)?),
            status: Set(data.status.as_str().to_string()),
            thumbnail: Set(data.thumbnail),
            read_time: Set(data.read_time),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_post(result)
    }

    async fn patch_blog_post(
        &self,
        post_id: Uuid,
        data: PatchBlogPostData,
    ) -> Result<BlogPost, BlogRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }

        if let PatchField::Value(excerpt) = data.excerpt {
            model.excerpt = Set(excerpt);
        }

        if let PatchField::Value(author) = data.author {
            model.author = Set(author);
        }

        if let PatchField::Value(category) = data.category {
            model.category = Set(category);
        }

        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(to_json(&tags)?);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        if let PatchField::Value(thumbnail) = data.thumbnail {
            model.thumbnail = Set(thumbnail);
        }

        if let PatchField::Value(read_time) = data.read_time {
            model.read_time = Set(read_time);
        }

        let has_changes = model.title.is_set()
            || model.content.is_set()
            || model.excerpt.is_set()
            || model.author.is_set()
            || model.category.is_set()
            || model.tags.is_set()
            || model.status.is_set()
            || model.thumbnail.is_set()
            || model.read_time.is_set();

        if !has_changes {
            let result = Entity::find_by_id(post_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(BlogRepositoryError::NotFound)?;

            return model_to_post(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(post_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(BlogRepositoryError::NotFound)?;

        model_to_post(result)
    }

    async fn delete_blog_post(&self, post_id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(post_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_post(model: blog_posts::Model) -> Result<BlogPost, BlogRepositoryError> {
    model
        .into_blog_post()
        .map_err(BlogRepositoryError::SerializationError)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, BlogRepositoryError> {
    serde_json::to_value(data).map_err(|e| BlogRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::shared::content::PublicationStatus;

    fn create_test_data() -> CreateBlogPostData {
        CreateBlogPostData {
            title: "Learning Rust".to_string(),
            content: "Body".to_string(),
            excerpt: "Short".to_string(),
            author: "Dina".to_string(),
            category: "Programming".to_string(),
            tags: vec!["rust".to_string(), "web".to_string()],
            status: PublicationStatus::Draft,
            thumbnail: "https://cdn.example.com/t.png".to_string(),
            read_time: "5 min".to_string(),
        }
    }

    fn create_mock_model(id: Uuid, title: &str, status: &str) -> blog_posts::Model {
        let now = Utc::now().fixed_offset();

        blog_posts::Model {
            id,
            title: title.to_string(),
            content: "Body".to_string(),
            excerpt: "Short".to_string(),
            author: "Dina".to_string(),
            category: "Programming".to_string(),
            tags: serde_json::json!(["rust", "web"]),
            status: status.to_string(),
            thumbnail: "https://cdn.example.com/t.png".to_string(),
            read_time: "5 min".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    // ========================================================================
    // create_blog_post Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_blog_post_success() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_model(id, "Learning Rust", "draft")]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let post = repo.create_blog_post(create_test_data()).await.unwrap();

        assert_eq!(post.id, id);
        assert_eq!(post.title, "Learning Rust");
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.status, PublicationStatus::Draft);
    }

    #[tokio::test]
    async fn test_create_blog_post_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("insert failed".to_string())])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_blog_post(create_test_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            BlogRepositoryError::DatabaseError(_)
        ));
    }

    #[tokio::test]
    async fn test_create_blog_post_unknown_status_in_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_model(
                Uuid::new_v4(),
                "Learning Rust",
                "archived",
            )]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_blog_post(create_test_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            BlogRepositoryError::SerializationError(_)
        ));
    }

    // ========================================================================
    // patch_blog_post Tests
    // ========================================================================

    #[tokio::test]
    async fn test_patch_blog_post_updates_fields() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_model(id, "Renamed", "published")]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let data = PatchBlogPostData {
            title: PatchField::Value("Renamed".to_string()),
            status: PatchField::Value(PublicationStatus::Published),
            ..Default::default()
        };

        let post = repo.patch_blog_post(id, data).await.unwrap();

        assert_eq!(post.title, "Renamed");
        assert_eq!(post.status, PublicationStatus::Published);
    }

    #[tokio::test]
    async fn test_patch_blog_post_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_posts::Model>::new()])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let data = PatchBlogPostData {
            excerpt: PatchField::Value("New".to_string()),
            ..Default::default()
        };

        let result = repo.patch_blog_post(Uuid::new_v4(), data).await;
        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_patch_blog_post_no_changes_returns_current() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_model(id, "Unchanged", "draft")]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let post = repo
            .patch_blog_post(id, PatchBlogPostData::default())
            .await
            .unwrap();

        assert_eq!(post.title, "Unchanged");
    }

    #[tokio::test]
    async fn test_patch_blog_post_no_changes_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_posts::Model>::new()])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch_blog_post(Uuid::new_v4(), PatchBlogPostData::default())
            .await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }

    // ========================================================================
    // delete_blog_post Tests
    // ========================================================================

    #[tokio::test]
    async fn test_delete_blog_post_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete_blog_post(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_blog_post_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_blog_post(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), BlogRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_blog_post_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("boom".to_string())])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_blog_post(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            BlogRepositoryError::DatabaseError(_)
        ));
    }
}
