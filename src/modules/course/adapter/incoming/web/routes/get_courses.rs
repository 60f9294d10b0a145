use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::course::application::domain::entities::CourseLevel;
use crate::modules::course::application::ports::incoming::use_cases::GetCoursesError;
use crate::modules::course::application::ports::outgoing::CourseListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::content::{PageRequest, PublicationStatus};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    pub search: Option<String>,
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/admin/courses")]
pub async fn get_courses_handler(
    _admin: AdminSession,
    query: web::Query<CourseListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::from_query(query.page.unwrap_or(0), query.per_page.unwrap_or(0));

    let filter = CourseListFilter {
        status: query.status,
        category: query.category,
        level: query.level,
        search: query.search,
    };

    match data.course.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetCoursesError::QueryFailed(e)) => {
            error!("Failed to list courses: {}", e);
            ApiResponse::internal_error()
        }
    }
}
