use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::blog::application::ports::incoming::use_cases::PatchBlogPostError;
use crate::modules::blog::application::ports::outgoing::PatchBlogPostData;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::shared::content::{PatchField, PublicationStatus, TagsInput};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchBlogPostRequest {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub content: PatchField<String>,

    #[serde(default)]
    pub excerpt: PatchField<String>,

    #[serde(default)]
    pub author: PatchField<String>,

    #[serde(default)]
    pub category: PatchField<String>,

    #[serde(default)]
    pub tags: PatchField<TagsInput>,

    #[serde(default)]
    pub status: PatchField<PublicationStatus>,

    #[serde(default)]
    pub thumbnail: PatchField<String>,

    #[serde(default)]
    pub read_time: PatchField<String>,
}

impl From<PatchBlogPostRequest> for PatchBlogPostData {
    fn from(req: PatchBlogPostRequest) -> Self {
        PatchBlogPostData {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            author: req.author,
            category: req.category,
            tags: req.tags.map(TagsInput::into_tags),
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

#[patch("/api/admin/blog/{post_id}")]
pub async fn patch_blog_post_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<PatchBlogPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = match parse_record_id(&path, "INVALID_BLOG_POST_ID", "Invalid blog post ID") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data
        .blog
        .patch
        .execute(post_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchBlogPostError::InvalidField(invalid)) => {
            ApiResponse::bad_request("INVALID_FIELD", invalid.to_string())
        }

        Err(PatchBlogPostError::NotFound) => {
            ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
        }

        Err(PatchBlogPostError::RepositoryError(e)) => {
            error!("Repository error patching blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
