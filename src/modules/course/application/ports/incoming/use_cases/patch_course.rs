use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::outgoing::{CourseRepositoryError, PatchCourseData};
use crate::shared::content::InvalidField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCourseError {
    #[error("{0}")]
    InvalidField(InvalidField),

    #[error("Course not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<InvalidField> for PatchCourseError {
    fn from(err: InvalidField) -> Self {
        PatchCourseError::InvalidField(err)
    }
}

impl From<CourseRepositoryError> for PatchCourseError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => PatchCourseError::NotFound,
            CourseRepositoryError::DatabaseError(msg)
            | CourseRepositoryError::SerializationError(msg) => {
                PatchCourseError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        data: PatchCourseData,
    ) -> Result<Course, PatchCourseError>;
}
