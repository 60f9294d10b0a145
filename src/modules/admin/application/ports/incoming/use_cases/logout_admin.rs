use async_trait::async_trait;

use crate::modules::admin::application::ports::outgoing::RevokedSessionStoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutAdminError {
    #[error("Session revocation failed: {0}")]
    RevocationFailed(String),
}

impl From<RevokedSessionStoreError> for LogoutAdminError {
    fn from(err: RevokedSessionStoreError) -> Self {
        LogoutAdminError::RevocationFailed(err.to_string())
    }
}

/// Missing, invalid and expired tokens are a successful no-op.
#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: Option<String>) -> Result<(), LogoutAdminError>;
}
