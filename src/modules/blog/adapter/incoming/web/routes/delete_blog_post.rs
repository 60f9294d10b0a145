use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::blog::application::ports::incoming::use_cases::DeleteBlogPostError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

#[delete("/api/admin/blog/{post_id}")]
pub async fn delete_blog_post_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match parse_record_id(&path, "INVALID_BLOG_POST_ID", "Invalid blog post ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.blog.delete.execute(post_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteBlogPostError::NotFound) => {
            ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
        }

        Err(DeleteBlogPostError::RepositoryError(e)) => {
            error!("Repository error deleting blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
