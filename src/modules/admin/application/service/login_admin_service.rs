use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::admin::application::domain::entities::IssuedSession;
use crate::modules::admin::application::ports::incoming::use_cases::{
    LoginAdminError, LoginAdminUseCase,
};
use crate::modules::admin::application::ports::outgoing::{PasswordHasher, SessionTokenProvider};

/// Checks the single admin password against its stored PHC hash.
pub struct LoginAdminService<H, T>
where
    H: PasswordHasher,
    T: SessionTokenProvider,
{
    password_hash: String,
    hasher: H,
    token_provider: T,
}

impl<H, T> LoginAdminService<H, T>
where
    H: PasswordHasher,
    T: SessionTokenProvider,
{
    pub fn new(password_hash: String, hasher: H, token_provider: T) -> Self {
        Self {
            password_hash,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<H, T> LoginAdminUseCase for LoginAdminService<H, T>
where
    H: PasswordHasher + Send + Sync,
    T: SessionTokenProvider + Send + Sync,
{
    async fn execute(&self, password: Option<String>) -> Result<IssuedSession, LoginAdminError> {
        // Blank check only; the password is verified exactly as typed
        let password = match password {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(LoginAdminError::PasswordRequired),
        };

        let matches = self
            .hasher
            .verify_password(&password, &self.password_hash)
            .await?;

        if !matches {
            warn!("Admin login failed: wrong password");
            return Err(LoginAdminError::InvalidPassword);
        }

        let session = self.token_provider.issue_session()?;
        info!(expires_at = %session.expires_at, "Admin session issued");

        Ok(session)
    }
}
