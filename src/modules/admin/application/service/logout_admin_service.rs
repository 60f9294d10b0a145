use async_trait::async_trait;
use chrono::DateTime;
use tracing::{debug, info};

use crate::modules::admin::application::ports::incoming::use_cases::{
    LogoutAdminError, LogoutAdminUseCase,
};
use crate::modules::admin::application::ports::outgoing::token_hasher::hash_token;
use crate::modules::admin::application::ports::outgoing::{
    RevokedSessionStore, RevokedSessionStoreError, SessionTokenProvider,
};

pub struct LogoutAdminService<T, S>
where
    T: SessionTokenProvider,
    S: RevokedSessionStore,
{
    token_provider: T,
    revoked_sessions: S,
}

impl<T, S> LogoutAdminService<T, S>
where
    T: SessionTokenProvider,
    S: RevokedSessionStore,
{
    pub fn new(token_provider: T, revoked_sessions: S) -> Self {
        Self {
            token_provider,
            revoked_sessions,
        }
    }
}

#[async_trait]
impl<T, S> LogoutAdminUseCase for LogoutAdminService<T, S>
where
    T: SessionTokenProvider + Send + Sync,
    S: RevokedSessionStore + Send + Sync,
{
    async fn execute(&self, token: Option<String>) -> Result<(), LogoutAdminError> {
        let Some(token) = token else {
            return Ok(());
        };

        let claims = match self.token_provider.verify_session(&token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Logout with unusable token");
                return Ok(());
            }
        };

        let Some(expires_at) = DateTime::from_timestamp(claims.exp, 0) else {
            return Ok(());
        };

        match self
            .revoked_sessions
            .revoke(hash_token(&token), expires_at)
            .await
        {
            Ok(()) => {
                info!(session_id = %claims.jti, "Admin session revoked");
                Ok(())
            }
            Err(RevokedSessionStoreError::AlreadyExpired) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
