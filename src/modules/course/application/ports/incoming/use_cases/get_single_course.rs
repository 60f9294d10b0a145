use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::outgoing::CourseQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CourseQueryError> for GetSingleCourseError {
    fn from(err: CourseQueryError) -> Self {
        match err {
            CourseQueryError::NotFound => GetSingleCourseError::NotFound,
            other => GetSingleCourseError::QueryFailed(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetSingleCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<Course, GetSingleCourseError>;
}
