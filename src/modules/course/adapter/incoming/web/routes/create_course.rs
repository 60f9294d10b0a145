use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::domain::entities::CourseLevel;
use crate::modules::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::PublicationStatus;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
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

impl From<CreateCourseRequest> for CreateCourseCommand {
    fn from(req: CreateCourseRequest) -> Self {
        CreateCourseCommand {
            title: req.title,
            description: req.description,
            content: req.content,
            category: req.category,
            price: req.price,
            duration: req.duration,
            level: req.level,
            status: req.status,
            image: req.image,
            modules: req.modules,
            your_learning: req.your_learning,
        }
    }
}

#[post("/api/admin/courses")]
pub async fn create_course_handler(
    _admin: AdminSession,
    req: web::Json<CreateCourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.course.create.execute(req.into_inner().into()).await {
        Ok(course) => ApiResponse::created(course),

        Err(CreateCourseError::MissingFields(missing)) => {
            ApiResponse::bad_request("MISSING_REQUIRED_FIELDS", missing.to_string())
        }

        Err(CreateCourseError::RepositoryError(e)) => {
            error!("Repository error creating course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
