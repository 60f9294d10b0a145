pub mod password_hasher;
pub mod revoked_session_store;
pub mod session_token_provider;
pub mod token_hasher;

pub use password_hasher::{HashError, PasswordHasher};
pub use revoked_session_store::{RevokedSessionStore, RevokedSessionStoreError};
pub use session_token_provider::{SessionClaims, SessionTokenProvider, TokenError};
