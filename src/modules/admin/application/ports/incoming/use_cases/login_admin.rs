use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::IssuedSession;
use crate::modules::admin::application::ports::outgoing::{HashError, TokenError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Password is required")]
    PasswordRequired,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<HashError> for LoginAdminError {
    fn from(err: HashError) -> Self {
        LoginAdminError::VerificationFailed(err.to_string())
    }
}

impl From<TokenError> for LoginAdminError {
    fn from(err: TokenError) -> Self {
        LoginAdminError::TokenGenerationFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, password: Option<String>) -> Result<IssuedSession, LoginAdminError>;
}
