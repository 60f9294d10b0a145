use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogPostsError;
use crate::modules::blog::application::ports::outgoing::BlogPostListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::content::{PageRequest, PublicationStatus};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BlogListQuery {
    pub search: Option<String>,
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl BlogListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.unwrap_or(0), self.per_page.unwrap_or(0))
    }

    pub fn into_filter(self) -> BlogPostListFilter {
        BlogPostListFilter {
            status: self.status,
            category: self.category,
            tag: self.tag,
            search: self.search,
        }
    }
}

/// Admin listing: every status unless `status` narrows it.
#[get("/api/admin/blog")]
pub async fn get_blog_posts_handler(
    _admin: AdminSession,
    query: web::Query<BlogListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = query.page_request();

    match data.blog.get_list.execute(query.into_filter(), page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetBlogPostsError::QueryFailed(e)) => {
            error!("Failed to list blog posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
