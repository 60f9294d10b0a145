//! Hand-written admin ports for the service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::admin::application::domain::entities::{
    IssuedSession, ADMIN_SESSION_TOKEN_TYPE, ADMIN_SUBJECT,
};
use crate::modules::admin::application::ports::outgoing::{
    HashError, PasswordHasher, RevokedSessionStore, RevokedSessionStoreError, SessionClaims,
    SessionTokenProvider, TokenError,
};

/* --------------------------------------------------
 * PasswordHasher: "hash" is the password reversed
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct ReversingHasher {
    pub fail: bool,
}

#[async_trait]
impl PasswordHasher for ReversingHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(password.chars().rev().collect())
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.fail {
            return Err(HashError::VerifyFailed);
        }
        Ok(password.chars().rev().collect::<String>() == hash)
    }
}

/* --------------------------------------------------
 * SessionTokenProvider: token "valid:<jti>" verifies
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct FakeTokenProvider {
    pub jti: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Default for FakeTokenProvider {
    fn default() -> Self {
        Self {
            jti: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }
}

impl FakeTokenProvider {
    pub fn token(&self) -> String {
        format!("valid:{}", self.jti)
    }
}

impl SessionTokenProvider for FakeTokenProvider {
    fn issue_session(&self) -> Result<IssuedSession, TokenError> {
        Ok(IssuedSession {
            token: self.token(),
            expires_at: self.expires_at,
        })
    }

    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError> {
        if token != self.token() {
            return Err(TokenError::MalformedToken);
        }

        Ok(SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            jti: self.jti,
            iss: "test".to_string(),
            iat: Utc::now().timestamp(),
            nbf: Utc::now().timestamp(),
            exp: self.expires_at.timestamp(),
            token_type: ADMIN_SESSION_TOKEN_TYPE.to_string(),
        })
    }

    fn session_ttl_secs(&self) -> i64 {
        3600
    }
}

/* --------------------------------------------------
 * RevokedSessionStore backed by a HashMap
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct InMemoryRevokedStore {
    pub fail: bool,
    pub entries: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
}

impl InMemoryRevokedStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl RevokedSessionStore for InMemoryRevokedStore {
    async fn revoke(
        &self,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RevokedSessionStoreError> {
        if self.fail {
            return Err(RevokedSessionStoreError::StoreError("redis down".to_string()));
        }
        self.entries.lock().unwrap().insert(token_hash, expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevokedSessionStoreError> {
        if self.fail {
            return Err(RevokedSessionStoreError::StoreError("redis down".to_string()));
        }
        Ok(self.entries.lock().unwrap().contains_key(token_hash))
    }
}
