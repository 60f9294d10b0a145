use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::ports::incoming::use_cases::GetSingleCourseError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[get("/api/admin/courses/{course_id}")]
pub async fn get_single_course_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = match parse_record_id(&path, "INVALID_COURSE_ID", "Invalid course ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.course.get_single.execute(course_id).await {
        Ok(course) => ApiResponse::success(course),

        Err(GetSingleCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(GetSingleCourseError::QueryFailed(e)) => {
            error!("Failed to load course {}: {}", course_id, e);
            ApiResponse::internal_error()
        }
    }
}
