use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::blog::application::ports::incoming::use_cases::GetSingleBlogPostError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[get("/api/admin/blog/{post_id}")]
pub async fn get_single_blog_post_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match parse_record_id(&path, "INVALID_BLOG_POST_ID", "Invalid blog post ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.blog.get_single.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),

        Err(GetSingleBlogPostError::NotFound) => {
            ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
        }

        Err(GetSingleBlogPostError::QueryFailed(e)) => {
            error!("Failed to load blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
