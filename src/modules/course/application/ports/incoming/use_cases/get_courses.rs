use async_trait::async_trait;

use crate::modules::course::application::domain::entities::CourseSummary;
use crate::modules::course::application::ports::outgoing::{CourseListFilter, CourseQueryError};
use crate::shared::content::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCoursesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CourseQueryError> for GetCoursesError {
    fn from(err: CourseQueryError) -> Self {
        GetCoursesError::QueryFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseSummary>, GetCoursesError>;
}
