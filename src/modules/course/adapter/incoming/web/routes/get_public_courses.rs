use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::course::application::domain::entities::CourseLevel;
use crate::modules::course::application::ports::incoming::use_cases::GetCoursesError;
use crate::modules::course::application::ports::outgoing::CourseListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::content::{PageRequest, PublicationStatus};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PublicCourseListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/courses")]
pub async fn get_public_courses_handler(
    query: web::Query<PublicCourseListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::from_query(query.page.unwrap_or(0), query.per_page.unwrap_or(0));

    let filter = CourseListFilter {
        status: Some(PublicationStatus::Published),
        category: query.category,
        level: query.level,
        search: query.search,
    };

    match data.course.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetCoursesError::QueryFailed(e)) => {
            error!("Failed to list public courses: {}", e);
            ApiResponse::internal_error()
        }
    }
}
