use std::sync::Arc;

use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobUseCase, DeleteJobUseCase, GetJobsUseCase, GetPublicSingleJobUseCase,
    GetSingleJobUseCase, PatchJobUseCase,
};

#[derive(Clone)]
pub struct JobUseCases {
    pub create: Arc<dyn CreateJobUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetJobsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleJobUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleJobUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchJobUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteJobUseCase + Send + Sync>,
}
