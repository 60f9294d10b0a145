use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::modules::admin::application::ports::outgoing::{
    RevokedSessionStore, RevokedSessionStoreError,
};

/// Redis-backed deny-list of logged-out admin sessions.
///
/// ## Redis data model
/// ```text
/// admin:session:revoked:{token_hash} -> "1"
/// ```
/// - Exists ⇒ the session was logged out
/// - TTL = remaining lifetime of the token, so Redis does the cleanup
#[derive(Clone)]
pub struct RevokedSessionRedis {
    pool: Arc<Pool>,
}

impl RevokedSessionRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token_hash: &str) -> String {
        format!("admin:session:revoked:{token_hash}")
    }

    /// Seconds until `expires_at`; `None` once it has passed.
    fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u64> {
        let ttl = (expires_at - now).num_seconds();
        (ttl > 0).then_some(ttl as u64)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, RevokedSessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| RevokedSessionStoreError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl RevokedSessionStore for RevokedSessionRedis {
    /// ```text
    /// SET admin:session:revoked:{hash} "1" EX <ttl>
    /// ```
    async fn revoke(
        &self,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RevokedSessionStoreError> {
        let ttl = Self::remaining_ttl(expires_at, Utc::now())
            .ok_or(RevokedSessionStoreError::AlreadyExpired)?;

        let key = Self::session_key(&token_hash);
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(key, "1", ttl)
            .await
            .map_err(|e| RevokedSessionStoreError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevokedSessionStoreError> {
        let key = Self::session_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| RevokedSessionStoreError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}
