use async_trait::async_trait;

use crate::modules::course::application::ports::outgoing::CourseQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCourseCategoriesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CourseQueryError> for GetCourseCategoriesError {
    fn from(err: CourseQueryError) -> Self {
        GetCourseCategoriesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetCourseCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetCourseCategoriesError>;
}
