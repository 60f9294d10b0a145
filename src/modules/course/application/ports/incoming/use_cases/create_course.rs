use async_trait::async_trait;

use crate::modules::course::application::domain::entities::{Course, CourseLevel};
use crate::modules::course::application::ports::outgoing::CourseRepositoryError;
use crate::shared::content::{MissingFields, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateCourseCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<PublicationStatus>,
    pub image: Option<String>,
    pub modules: Option<String>,
    pub your_learning: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("{0}")]
    MissingFields(MissingFields),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for CreateCourseError {
    fn from(err: CourseRepositoryError) -> Self {
        CreateCourseError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError>;
}
