use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::VerifiedSession;
use crate::modules::admin::application::ports::outgoing::{RevokedSessionStoreError, TokenError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyAdminSessionError {
    #[error("Invalid session: {0}")]
    InvalidToken(TokenError),

    #[error("Session has been revoked")]
    Revoked,

    #[error("Revocation store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<TokenError> for VerifyAdminSessionError {
    fn from(err: TokenError) -> Self {
        VerifyAdminSessionError::InvalidToken(err)
    }
}

impl From<RevokedSessionStoreError> for VerifyAdminSessionError {
    fn from(err: RevokedSessionStoreError) -> Self {
        VerifyAdminSessionError::StoreUnavailable(err.to_string())
    }
}

#[async_trait]
pub trait VerifyAdminSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<VerifiedSession, VerifyAdminSessionError>;
}
