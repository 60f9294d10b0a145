// src/modules/course/application/ports/outgoing/course_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::{Course, CourseLevel, CourseSummary};
use crate::shared::content::{PageRequest, PageResult, PublicationStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseListFilter {
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    /// Case-insensitive match on title and description
    pub search: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Course not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn get_by_id(&self, course_id: Uuid) -> Result<Course, CourseQueryError>;

    async fn get_published_by_id(&self, course_id: Uuid) -> Result<Course, CourseQueryError>;

    /// Newest first
    async fn list(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseSummary>, CourseQueryError>;

    async fn published_categories(&self) -> Result<Vec<String>, CourseQueryError>;
}
