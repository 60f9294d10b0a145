mod create_job_service;
mod delete_job_service;
mod get_jobs_service;
mod get_public_single_job_service;
mod get_single_job_service;
mod patch_job_service;

#[cfg(test)]
mod test_doubles;

pub use create_job_service::CreateJobService;
pub use delete_job_service::DeleteJobService;
pub use get_jobs_service::GetJobsService;
pub use get_public_single_job_service::GetPublicSingleJobService;
pub use get_single_job_service::GetSingleJobService;
pub use patch_job_service::PatchJobService;
