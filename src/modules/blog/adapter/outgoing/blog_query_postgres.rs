// src/modules/blog/adapter/outgoing/blog_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts::{self, Column, Entity};
use crate::modules::blog::application::domain::entities::{BlogPost, BlogPostSummary};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostListFilter, BlogQuery, BlogQueryError,
};
use crate::shared::content::{contains_pattern, PageRequest, PageResult, PublicationStatus};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn get_by_id(&self, post_id: Uuid) -> Result<BlogPost, BlogQueryError> {
        let post = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        model_to_post(post)
    }

    async fn get_published_by_id(&self, post_id: Uuid) -> Result<BlogPost, BlogQueryError> {
        let post = Entity::find_by_id(post_id)
            .filter(Column::Status.eq(PublicationStatus::Published.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        model_to_post(post)
    }

    async fn list(
        &self,
        filter: BlogPostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogPostSummary>, BlogQueryError> {
        let mut query = Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(category) = non_blank(filter.category) {
            query = query.filter(Column::Category.eq(category));
        }

        // JSONB containment keeps the GIN index usable
        if let Some(tag) = non_blank(filter.tag) {
            query = query.filter(Expr::cust_with_values(
                "\"tags\" @> $1",
                [serde_json::json!([tag])],
            ));
        }

        if let Some(search) = non_blank(filter.search) {
            let pattern = contains_pattern(&search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(Column::Excerpt).ilike(pattern)),
            );
        }

        query = query.order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let posts = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items: Result<Vec<BlogPostSummary>, BlogQueryError> =
            posts.into_iter().map(model_to_summary).collect();

        Ok(PageResult {
            items: items?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn published_categories(&self) -> Result<Vec<String>, BlogQueryError> {
        Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::Status.eq(PublicationStatus::Published.as_str()))
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn model_to_post(model: blog_posts::Model) -> Result<BlogPost, BlogQueryError> {
    model
        .into_blog_post()
        .map_err(BlogQueryError::SerializationError)
}

fn model_to_summary(model: blog_posts::Model) -> Result<BlogPostSummary, BlogQueryError> {
    model
        .into_summary()
        .map_err(BlogQueryError::SerializationError)
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
