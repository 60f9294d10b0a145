use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::blog::application::ports::incoming::use_cases::GetBlogCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Registered ahead of `/api/blog/{post_id}`.
#[get("/api/blog/categories")]
pub async fn get_blog_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.get_categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),

        Err(GetBlogCategoriesError::QueryFailed(e)) => {
            error!("Failed to load blog categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}
