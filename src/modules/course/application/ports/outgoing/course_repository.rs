// src/modules/course/application/ports/outgoing/course_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::{Course, CourseLevel};
use crate::shared::content::{PatchField, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub price: f64,
    pub duration: String,
    pub level: CourseLevel,
    pub status: PublicationStatus,
    pub image: String,
    pub modules: String,
    pub your_learning: String,
}

/// Unset keeps the stored value; Null is rejected before it gets here.
#[derive(Debug, Clone, Default)]
pub struct PatchCourseData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub content: PatchField<String>,
    pub category: PatchField<String>,
    pub price: PatchField<f64>,
    pub duration: PatchField<String>,
    pub level: PatchField<CourseLevel>,
    pub status: PatchField<PublicationStatus>,
    pub image: PatchField<String>,
    pub modules: PatchField<String>,
    pub your_learning: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Course not found")]
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
pub trait CourseRepository: Send + Sync {
    async fn create_course(&self, data: CreateCourseData) -> Result<Course, CourseRepositoryError>;

    async fn patch_course(
        &self,
        course_id: Uuid,
        data: PatchCourseData,
    ) -> Result<Course, CourseRepositoryError>;

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError>;
}
