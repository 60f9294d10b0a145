// src/modules/job/application/ports/outgoing/job_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::job::application::domain::entities::{
    JobPosting, JobPostingSummary, JobSector, JobType,
};
use crate::shared::content::{PageRequest, PageResult, PublicationStatus};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSort {
    /// Newest first
    #[default]
    Latest,
    /// Highest salary first, newest first among equals
    Salary,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobListFilter {
    pub status: Option<PublicationStatus>,
    pub job_type: Option<JobType>,
    pub sector: Option<JobSector>,
    /// Some(true): application window contains now. Some(false): it does not.
    pub open: Option<bool>,
    /// Case-insensitive match on title and company
    pub search: Option<String>,
    pub sort: JobSort,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobQueryError {
    #[error("Job posting not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait JobQuery: Send + Sync {
    async fn get_by_id(&self, job_id: Uuid) -> Result<JobPosting, JobQueryError>;

    /// Drafts answer NotFound
    async fn get_published_by_id(&self, job_id: Uuid) -> Result<JobPosting, JobQueryError>;

    async fn list(
        &self,
        filter: JobListFilter,
        page: PageRequest,
    ) -> Result<PageResult<JobPostingSummary>, JobQueryError>;
}
