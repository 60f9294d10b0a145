use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::job::adapter::outgoing::sea_orm_entity::job_postings::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::job::application::domain::entities::JobPosting;
use crate::modules::job::application::ports::outgoing::{
    CreateJobPostingData, JobRepository, JobRepositoryError, PatchJobPostingData,
};
use crate::shared::content::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn create_job(
        &self,
        data: CreateJobPostingData,
    ) -> Result<JobPosting, JobRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            company: Set(data.company),
            location: Set(data.location),
            salary: Set(data.salary),
            job_type: Set(data.job_type.as_str().to_string()),
            sector: Set(data.sector.as_str().to_string()),
            apply_start_date: Set(data.apply_start_date.fixed_offset()),
            apply_end_date: Set(data.apply_end_date.fixed_offset()),
            description: Set(data.description),
            eligibility: Set(data.eligibility),
            status: Set(data.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_job(result)
    }

    async fn patch_job(
        &self,
        job_id: Uuid,
        data: PatchJobPostingData,
    ) -> Result<JobPosting, JobRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(company) = data.company {
            model.company = Set(company);
        }
        if let PatchField::Value(location) = data.location {
            model.location = Set(location);
        }
        if let PatchField::Value(salary) = data.salary {
            model.salary = Set(salary);
        }
        if let PatchField::Value(job_type) = data.job_type {
            model.job_type = Set(job_type.as_str().to_string());
        }
        if let PatchField::Value(sector) = data.sector {
            model.sector = Set(sector.as_str().to_string());
        }
        if let PatchField::Value(start) = data.apply_start_date {
            model.apply_start_date = Set(start.fixed_offset());
        }
        if let PatchField::Value(end) = data.apply_end_date {
            model.apply_end_date = Set(end.fixed_offset());
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(eligibility) = data.eligibility {
            model.eligibility = Set(eligibility);
        }
        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        let has_changes = model.title.is_set()
            || model.company.is_set()
            || model.location.is_set()
            || model.salary.is_set()
            || model.job_type.is_set()
            || model.sector.is_set()
            || model.apply_start_date.is_set()
            || model.apply_end_date.is_set()
            || model.description.is_set()
            || model.eligibility.is_set()
            || model.status.is_set();

        if !has_changes {
            let result = Entity::find_by_id(job_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(JobRepositoryError::NotFound)?;

            return model_to_job(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(job_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(JobRepositoryError::NotFound)?;

        model_to_job(result)
    }

    async fn delete_job(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(job_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_job(model: job_postings::Model) -> Result<JobPosting, JobRepositoryError> {
    model
        .into_job_posting()
        .map_err(JobRepositoryError::SerializationError)
}

fn map_db_err(e: DbErr) -> JobRepositoryError {
    JobRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
