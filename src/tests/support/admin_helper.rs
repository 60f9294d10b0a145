use actix_web::cookie::Cookie;

use crate::modules::admin::adapter::incoming::web::session_cookie::ADMIN_SESSION_COOKIE;

/// The only token the default verify stub accepts.
pub const ADMIN_TOKEN: &str = "test-admin-token";

pub fn admin_cookie() -> Cookie<'static> {
    Cookie::new(ADMIN_SESSION_COOKIE, ADMIN_TOKEN)
}
