use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::course::application::ports::incoming::use_cases::GetCourseCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Registered ahead of `/api/courses/{course_id}`.
#[get("/api/courses/categories")]
pub async fn get_course_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.course.get_categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),

        Err(GetCourseCategoriesError::QueryFailed(e)) => {
            error!("Failed to load course categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}
