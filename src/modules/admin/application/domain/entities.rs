use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Subject of every admin session token; there is a single operator.
pub const ADMIN_SUBJECT: &str = "admin";

/// `token_type` claim carried by admin session tokens.
pub const ADMIN_SESSION_TOKEN_TYPE: &str = "admin_session";

/// A freshly signed session token.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// A session that passed signature, expiry, type and revocation checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedSession {
    pub session_id: Uuid,
    pub expires_at: DateTime<Utc>,
}
