use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::ports::incoming::use_cases::DeleteCourseError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[delete("/api/admin/courses/{course_id}")]
pub async fn delete_course_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = match parse_record_id(&path, "INVALID_COURSE_ID", "Invalid course ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.course.delete.execute(course_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(DeleteCourseError::RepositoryError(e)) => {
            error!("Repository error deleting course {}: {}", course_id, e);
            ApiResponse::internal_error()
        }
    }
}
