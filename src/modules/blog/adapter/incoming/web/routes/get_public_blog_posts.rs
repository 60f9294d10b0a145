use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::blog::application::ports::incoming::use_cases::GetBlogPostsError;
use crate::modules::blog::application::ports::outgoing::BlogPostListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::content::{PageRequest, PublicationStatus};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PublicBlogListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/blog")]
pub async fn get_public_blog_posts_handler(
    query: web::Query<PublicBlogListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::from_query(query.page.unwrap_or(0), query.per_page.unwrap_or(0));

    let filter = BlogPostListFilter {
        status: Some(PublicationStatus::Published),
        category: query.category,
        tag: query.tag,
        search: query.search,
    };

    match data.blog.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetBlogPostsError::QueryFailed(e)) => {
            error!("Failed to list public blog posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
