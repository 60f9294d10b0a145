use actix_web::{web, HttpResponse, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::adapter::outgoing::jwt::{JwtConfig, JwtSessionService};
use crate::modules::admin::application::domain::entities::ADMIN_SESSION_TOKEN_TYPE;

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_blog_posts: u64,
    deleted_courses: u64,
    deleted_job_postings: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug)]
enum TokenKind {
    Valid,
    Expired,
    WrongType,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "WrongType" => Ok(TokenKind::WrongType),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Mint admin session tokens in various states
/// GET /test/token/{token_kind}
pub async fn generate_test_token(
    path: web::Path<String>,
    jwt: web::Data<JwtConfig>,
) -> Result<HttpResponse> {
    let token_kind: TokenKind = path
        .into_inner()
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    tracing::debug!("Generating test admin token - Kind: {:?}", token_kind);

    let issued = match token_kind {
        TokenKind::Valid => JwtSessionService::new(jwt.get_ref().clone())
            .issue_custom(ADMIN_SESSION_TOKEN_TYPE, jwt.session_expiry),
        // Past the 30s validation leeway
        TokenKind::Expired => JwtSessionService::new(jwt.get_ref().clone())
            .issue_custom(ADMIN_SESSION_TOKEN_TYPE, -120),
        TokenKind::WrongType => JwtSessionService::new(jwt.get_ref().clone())
            .issue_custom("access", jwt.session_expiry),
        TokenKind::InvalidSignature => {
            let wrong = JwtConfig {
                secret_key: "wrong-secret-wrong-secret-wrong-secret".to_string(),
                ..jwt.get_ref().clone()
            };
            JwtSessionService::new(wrong)
                .issue_custom(ADMIN_SESSION_TOKEN_TYPE, jwt.session_expiry)
        }
        TokenKind::Malformed => {
            return Ok(HttpResponse::Ok().json(TokenResponse {
                token: format!("malformed.{}.token", Uuid::new_v4()),
            }));
        }
    };

    let issued = issued.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        token: issued.token,
    }))
}

/// Wipe all content tables
/// DELETE /test/cleanup/content
pub async fn cleanup_content(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    let txn = db.as_ref().begin().await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Transaction error: {}", e))
    })?;

    let mut deleted = [0u64; 3];
    for (slot, table) in ["blog_posts", "courses", "job_postings"].iter().enumerate() {
        let result = txn
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                format!("DELETE FROM {}", table),
            ))
            .await
            .map_err(|e| {
                actix_web::error::ErrorInternalServerError(format!(
                    "Failed to delete {}: {}",
                    table, e
                ))
            })?;
        deleted[slot] = result.rows_affected();
    }

    txn.commit()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Commit failed: {}", e)))?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_blog_posts: deleted[0],
        deleted_courses: deleted[1],
        deleted_job_postings: deleted[2],
    }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/cleanup/content", web::delete().to(cleanup_content))
            .route("/token/{token_kind}", web::get().to(generate_test_token)),
    );
}
