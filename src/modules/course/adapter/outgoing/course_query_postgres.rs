use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::course::adapter::outgoing::sea_orm_entity::courses::{self, Column, Entity};
use crate::modules::course::application::domain::entities::{Course, CourseSummary};
use crate::modules::course::application::ports::outgoing::{
    CourseListFilter, CourseQuery, CourseQueryError,
};
use crate::shared::content::{contains_pattern, PageRequest, PageResult, PublicationStatus};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn get_by_id(&self, course_id: Uuid) -> Result<Course, CourseQueryError> {
        let course = Entity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CourseQueryError::NotFound)?;

        model_to_course(course)
    }

    async fn get_published_by_id(&self, course_id: Uuid) -> Result<Course, CourseQueryError> {
        let course = Entity::find_by_id(course_id)
            .filter(Column::Status.eq(PublicationStatus::Published.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CourseQueryError::NotFound)?;

        model_to_course(course)
    }

    async fn list(
        &self,
        filter: CourseListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseSummary>, CourseQueryError> {
        let query = apply_filter(Entity::find(), filter).order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let courses = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = courses
            .into_iter()
            .map(|m| model_to_course(m).map(CourseSummary::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn published_categories(&self) -> Result<Vec<String>, CourseQueryError> {
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

fn apply_filter(mut query: Select<Entity>, filter: CourseListFilter) -> Select<Entity> {
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status.as_str()));
    }

    if let Some(level) = filter.level {
        query = query.filter(Column::Level.eq(level.as_str()));
    }

    if let Some(category) = filter.category.as_deref().map(str::trim) {
        if !category.is_empty() {
            query = query.filter(Column::Category.eq(category));
        }
    }

    if let Some(search) = filter.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(Column::Description).ilike(pattern)),
            );
        }
    }

    query
}

fn model_to_course(model: courses::Model) -> Result<Course, CourseQueryError> {
    model
        .into_course()
        .map_err(CourseQueryError::SerializationError)
}

fn map_db_err(e: DbErr) -> CourseQueryError {
    CourseQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
