mod job_query;
mod job_repository;

pub use job_query::{JobListFilter, JobQuery, JobQueryError, JobSort};
pub use job_repository::{
    CreateJobPostingData, JobRepository, JobRepositoryError, PatchJobPostingData,
};
