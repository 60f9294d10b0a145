use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::blog::application::ports::incoming::use_cases::GetPublicSingleBlogPostError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[get("/api/blog/{post_id}")]
pub async fn get_public_single_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match parse_record_id(&path, "INVALID_BLOG_POST_ID", "Invalid blog post ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.blog.get_public_single.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),

        Err(GetPublicSingleBlogPostError::NotFound) => {
            ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
        }

        Err(GetPublicSingleBlogPostError::QueryFailed(e)) => {
            error!("Failed to load public blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
