use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RevokedSessionStoreError {
    #[error("Session already expired")]
    AlreadyExpired,

    #[error("Store error: {0}")]
    StoreError(String),
}

/// Deny-list of logged-out session tokens, keyed by token hash.
///
/// Entries only need to live until the token would have expired anyway.
#[async_trait]
pub trait RevokedSessionStore: Send + Sync {
    async fn revoke(
        &self,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RevokedSessionStoreError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevokedSessionStoreError>;
}
