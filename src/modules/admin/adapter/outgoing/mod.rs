pub mod jwt;
pub mod revoked_session_redis;
pub mod security;
