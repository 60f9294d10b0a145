use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::outgoing::CourseQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicSingleCourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CourseQueryError> for GetPublicSingleCourseError {
    fn from(err: CourseQueryError) -> Self {
        match err {
            CourseQueryError::NotFound => GetPublicSingleCourseError::NotFound,
            other => GetPublicSingleCourseError::QueryFailed(other.to_string()),
        }
    }
}

/// Only published courses resolve.
#[async_trait]
pub trait GetPublicSingleCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<Course, GetPublicSingleCourseError>;
}
