use async_trait::async_trait;
use chrono::DateTime;

use crate::modules::admin::application::domain::entities::VerifiedSession;
use crate::modules::admin::application::ports::incoming::use_cases::{
    VerifyAdminSessionError, VerifyAdminSessionUseCase,
};
use crate::modules::admin::application::ports::outgoing::token_hasher::hash_token;
use crate::modules::admin::application::ports::outgoing::{
    RevokedSessionStore, SessionTokenProvider, TokenError,
};

pub struct VerifyAdminSessionService<T, S>
where
    T: SessionTokenProvider,
    S: RevokedSessionStore,
{
    token_provider: T,
    revoked_sessions: S,
}

impl<T, S> VerifyAdminSessionService<T, S>
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
impl<T, S> VerifyAdminSessionUseCase for VerifyAdminSessionService<T, S>
where
    T: SessionTokenProvider + Send + Sync,
    S: RevokedSessionStore + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<VerifiedSession, VerifyAdminSessionError> {
        let claims = self.token_provider.verify_session(token)?;

        if self.revoked_sessions.is_revoked(&hash_token(token)).await? {
            return Err(VerifyAdminSessionError::Revoked);
        }

        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::MalformedToken)?;

        Ok(VerifiedSession {
            session_id: claims.jti,
            expires_at,
        })
    }
}
