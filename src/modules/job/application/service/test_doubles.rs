//! Configurable job ports shared by the service tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::job::application::domain::entities::{
    JobPosting, JobPostingSummary, JobSector, JobType,
};
use crate::modules::job::application::ports::outgoing::{
    CreateJobPostingData, JobListFilter, JobQuery, JobQueryError, JobRepository,
    JobRepositoryError, PatchJobPostingData,
};
use crate::shared::content::{PageRequest, PageResult, PublicationStatus};

pub fn sample_job(id: Uuid) -> JobPosting {
    let now = Utc::now();
    JobPosting {
        id,
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Jakarta".to_string(),
        salary: 12000.0,
        job_type: JobType::FullTime,
        sector: JobSector::Private,
        apply_start_date: now - Duration::days(1),
        apply_end_date: now + Duration::days(30),
        description: "Build APIs".to_string(),
        eligibility: "2 years experience".to_string(),
        status: PublicationStatus::Published,
        created_at: now,
        updated_at: now,
    }
}

/* --------------------------------------------------
 * Mock JobRepository
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct MockJobRepo {
    pub fail_with: Option<JobRepositoryError>,
    pub created: Arc<Mutex<Option<CreateJobPostingData>>>,
    pub patched: Arc<Mutex<Option<PatchJobPostingData>>>,
}

impl MockJobRepo {
    pub fn failing(err: JobRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), JobRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobRepository for MockJobRepo {
    async fn create_job(
        &self,
        data: CreateJobPostingData,
    ) -> Result<JobPosting, JobRepositoryError> {
        *self.created.lock().unwrap() = Some(data.clone());
        self.check()?;

        let now = Utc::now();
        Ok(JobPosting {
            id: Uuid::new_v4(),
            title: data.title,
            company: data.company,
            location: data.location,
            salary: data.salary,
            job_type: data.job_type,
            sector: data.sector,
            apply_start_date: data.apply_start_date,
            apply_end_date: data.apply_end_date,
            description: data.description,
            eligibility: data.eligibility,
            status: data.status,
            created_at: now,
            updated_at: now,
        })
    }

    async fn patch_job(
        &self,
        job_id: Uuid,
        data: PatchJobPostingData,
    ) -> Result<JobPosting, JobRepositoryError> {
        *self.patched.lock().unwrap() = Some(data);
        self.check()?;
        Ok(sample_job(job_id))
    }

    async fn delete_job(&self, _job_id: Uuid) -> Result<(), JobRepositoryError> {
        self.check()
    }
}

/* --------------------------------------------------
 * Mock JobQuery
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct MockJobQuery {
    pub fail_with: Option<JobQueryError>,
    pub published_only: bool,
    pub seen_filter: Arc<Mutex<Option<JobListFilter>>>,
}

impl MockJobQuery {
    pub fn failing(err: JobQueryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), JobQueryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobQuery for MockJobQuery {
    async fn get_by_id(&self, job_id: Uuid) -> Result<JobPosting, JobQueryError> {
        self.check()?;
        let mut job = sample_job(job_id);
        job.status = PublicationStatus::Draft;
        Ok(job)
    }

    async fn get_published_by_id(&self, job_id: Uuid) -> Result<JobPosting, JobQueryError> {
        self.check()?;
        if !self.published_only {
            return Err(JobQueryError::NotFound);
        }
        Ok(sample_job(job_id))
    }

    async fn list(
        &self,
        filter: JobListFilter,
        page: PageRequest,
    ) -> Result<PageResult<JobPostingSummary>, JobQueryError> {
        *self.seen_filter.lock().unwrap() = Some(filter);
        self.check()?;
        Ok(PageResult {
            items: vec![sample_job(Uuid::new_v4()).into()],
            page: page.page,
            per_page: page.per_page,
            total: 1,
        })
    }
}
