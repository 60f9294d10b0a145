mod create_job;
mod delete_job;
mod get_jobs;
mod get_public_jobs;
mod get_public_single_job;
mod get_single_job;
mod patch_job;

pub use create_job::create_job_handler;
pub use delete_job::delete_job_handler;
pub use get_jobs::{get_jobs_handler, JobListQuery};
pub use get_public_jobs::get_public_jobs_handler;
pub use get_public_single_job::get_public_single_job_handler;
pub use get_single_job::get_single_job_handler;
pub use patch_job::patch_job_handler;
