mod jwt_config;
mod jwt_session_service;

pub use jwt_config::JwtConfig;
pub use jwt_session_service::JwtSessionService;
