use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostCommand, CreateBlogPostError,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::{PublicationStatus, TagsInput};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<TagsInput>,
    pub status: Option<PublicationStatus>,
    pub thumbnail: Option<String>,
    pub read_time: Option<String>,
}

impl From<CreateBlogPostRequest> for CreateBlogPostCommand {
    fn from(req: CreateBlogPostRequest) -> Self {
        CreateBlogPostCommand {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            author: req.author,
            category: req.category,
            tags: req.tags,
            status: req.status,
            thumbnail: req.thumbnail,
            read_time: req.read_time,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/blog")]
pub async fn create_blog_post_handler(
    _admin: AdminSession,
    req: web::Json<CreateBlogPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.create.execute(req.into_inner().into()).await {
        Ok(post) => ApiResponse::created(post),

        Err(CreateBlogPostError::MissingFields(missing)) => {
            ApiResponse::bad_request("MISSING_REQUIRED_FIELDS", missing.to_string())
        }

        Err(CreateBlogPostError::RepositoryError(e)) => {
            error!("Repository error creating blog post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
