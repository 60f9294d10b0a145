// src/modules/job/application/ports/outgoing/job_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::job::application::domain::entities::{JobPosting, JobSector, JobType};
use crate::shared::content::{PatchField, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateJobPostingData {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub job_type: JobType,
    pub sector: JobSector,
    pub apply_start_date: DateTime<Utc>,
    pub apply_end_date: DateTime<Utc>,
    pub description: String,
    pub eligibility: String,
    pub status: PublicationStatus,
}

/// Unset keeps the stored value; Null is rejected before it gets here.
#[derive(Debug, Clone, Default)]
pub struct PatchJobPostingData {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub location: PatchField<String>,
    pub salary: PatchField<f64>,
    pub job_type: PatchField<JobType>,
    pub sector: PatchField<JobSector>,
    pub apply_start_date: PatchField<DateTime<Utc>>,
    pub apply_end_date: PatchField<DateTime<Utc>>,
    pub description: PatchField<String>,
    pub eligibility: PatchField<String>,
    pub status: PatchField<PublicationStatus>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobRepositoryError {
    #[error("Job posting not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create_job(&self, data: CreateJobPostingData)
        -> Result<JobPosting, JobRepositoryError>;

    async fn patch_job(
        &self,
        job_id: Uuid,
        data: PatchJobPostingData,
    ) -> Result<JobPosting, JobRepositoryError>;

    async fn delete_job(&self, job_id: Uuid) -> Result<(), JobRepositoryError>;
}
