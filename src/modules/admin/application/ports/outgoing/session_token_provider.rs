use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::admin::application::domain::entities::IssuedSession;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims of an admin session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub jti: Uuid,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub token_type: String,
}

pub trait SessionTokenProvider: Send + Sync {
    fn issue_session(&self) -> Result<IssuedSession, TokenError>;

    /// Signature, time window and token type are all checked.
    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError>;

    /// Session lifetime in seconds, used for the cookie `Max-Age`.
    fn session_ttl_secs(&self) -> i64;
}
