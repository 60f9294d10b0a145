use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::course::application::ports::incoming::use_cases::GetPublicSingleCourseError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[get("/api/courses/{course_id}")]
pub async fn get_public_single_course_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = match parse_record_id(&path, "INVALID_COURSE_ID", "Invalid course ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.course.get_public_single.execute(course_id).await {
        Ok(course) => ApiResponse::success(course),

        Err(GetPublicSingleCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(GetPublicSingleCourseError::QueryFailed(e)) => {
            error!("Failed to load public course {}: {}", course_id, e);
            ApiResponse::internal_error()
        }
    }
}
