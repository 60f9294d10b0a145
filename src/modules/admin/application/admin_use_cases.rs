use std::sync::Arc;

use crate::modules::admin::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LogoutAdminUseCase, VerifyAdminSessionUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    pub verify_session: Arc<dyn VerifyAdminSessionUseCase + Send + Sync>,
}
