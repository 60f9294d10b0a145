use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::BlogQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogCategoriesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetBlogCategoriesError {
    fn from(err: BlogQueryError) -> Self {
        GetBlogCategoriesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetBlogCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetBlogCategoriesError>;
}
