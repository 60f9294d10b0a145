use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::modules::admin::application::domain::entities::{
    IssuedSession, ADMIN_SESSION_TOKEN_TYPE, ADMIN_SUBJECT,
};
use crate::modules::admin::application::ports::outgoing::{
    SessionClaims, SessionTokenProvider, TokenError,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtSessionService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtSessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSessionService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtSessionService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn sign(&self, token_type: &str, expiry_seconds: i64) -> Result<IssuedSession, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(expiry_seconds);

        let claims = SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            jti: Uuid::new_v4(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
            token_type: token_type.to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedSession { token, expires_at })
    }

    /// Signs a token of an arbitrary type; the e2e helper routes use it to
    /// mint wrong-type and expired tokens.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn issue_custom(
        &self,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<IssuedSession, TokenError> {
        self.sign(token_type, expiry_seconds)
    }
}

impl SessionTokenProvider for JwtSessionService {
    fn issue_session(&self) -> Result<IssuedSession, TokenError> {
        self.sign(ADMIN_SESSION_TOKEN_TYPE, self.config.session_expiry)
    }

    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Session verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid session token signature");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!(error = %e, "Session verification failed");
                        TokenError::MalformedToken
                    }
                }
            })?;

        let claims = decoded.claims;

        if claims.token_type != ADMIN_SESSION_TOKEN_TYPE || claims.sub != ADMIN_SUBJECT {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ADMIN_SESSION_TOKEN_TYPE,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(
                ADMIN_SESSION_TOKEN_TYPE.to_string(),
            ));
        }

        Ok(claims)
    }

    fn session_ttl_secs(&self) -> i64 {
        self.config.session_expiry
    }
}
