mod create_job;
mod delete_job;
mod get_jobs;
mod get_public_single_job;
mod get_single_job;
mod patch_job;

pub use create_job::{CreateJobCommand, CreateJobError, CreateJobUseCase};
pub use delete_job::{DeleteJobError, DeleteJobUseCase};
pub use get_jobs::{GetJobsError, GetJobsUseCase};
pub use get_public_single_job::{GetPublicSingleJobError, GetPublicSingleJobUseCase};
pub use get_single_job::{GetSingleJobError, GetSingleJobUseCase};
pub use patch_job::{PatchJobError, PatchJobUseCase};
