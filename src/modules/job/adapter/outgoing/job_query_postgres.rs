use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::job::adapter::outgoing::sea_orm_entity::job_postings::{
    self, Column, Entity,
};
use crate::modules::job::application::domain::entities::{JobPosting, JobPostingSummary};
use crate::modules::job::application::ports::outgoing::{
    JobListFilter, JobQuery, JobQueryError, JobSort,
};
use crate::shared::content::{contains_pattern, PageRequest, PageResult, PublicationStatus};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct JobQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobQuery for JobQueryPostgres {
    async fn get_by_id(&self, job_id: Uuid) -> Result<JobPosting, JobQueryError> {
        let job = Entity::find_by_id(job_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(JobQueryError::NotFound)?;

        model_to_job(job)
    }

    async fn get_published_by_id(&self, job_id: Uuid) -> Result<JobPosting, JobQueryError> {
        let job = Entity::find_by_id(job_id)
            .filter(Column::Status.eq(PublicationStatus::Published.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(JobQueryError::NotFound)?;

        model_to_job(job)
    }

    async fn list(
        &self,
        filter: JobListFilter,
        page: PageRequest,
    ) -> Result<PageResult<JobPostingSummary>, JobQueryError> {
        let sort = filter.sort;
        let query = apply_filter(Entity::find(), filter, Utc::now());

        let query = match sort {
            JobSort::Latest => query.order_by_desc(Column::CreatedAt),
            JobSort::Salary => query
                .order_by_desc(Column::Salary)
                .order_by_desc(Column::CreatedAt),
        };

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let jobs = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = jobs
            .into_iter()
            .map(|m| model_to_job(m).map(JobPostingSummary::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_filter(
    mut query: Select<Entity>,
    filter: JobListFilter,
    now: DateTime<Utc>,
) -> Select<Entity> {
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status.as_str()));
    }

    if let Some(job_type) = filter.job_type {
        query = query.filter(Column::JobType.eq(job_type.as_str()));
    }

    if let Some(sector) = filter.sector {
        query = query.filter(Column::Sector.eq(sector.as_str()));
    }

    let now = now.fixed_offset();
    match filter.open {
        Some(true) => {
            query = query
                .filter(Column::ApplyStartDate.lte(now))
                .filter(Column::ApplyEndDate.gte(now));
        }
        Some(false) => {
            query = query.filter(
                Condition::any()
                    .add(Column::ApplyStartDate.gt(now))
                    .add(Column::ApplyEndDate.lt(now)),
            );
        }
        None => {}
    }

    if let Some(search) = filter.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(Column::Company).ilike(pattern)),
            );
        }
    }

    query
}

fn model_to_job(model: job_postings::Model) -> Result<JobPosting, JobQueryError> {
    model
        .into_job_posting()
        .map_err(JobQueryError::SerializationError)
}

fn map_db_err(e: DbErr) -> JobQueryError {
    JobQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
