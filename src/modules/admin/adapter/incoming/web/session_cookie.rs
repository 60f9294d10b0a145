use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

pub const ADMIN_SESSION_COOKIE: &str = "admin_token";

/// Attributes of the `admin_token` cookie.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookieConfig {
    /// Set in production, where the site is served over HTTPS.
    pub secure: bool,
    pub max_age_secs: i64,
}

impl SessionCookieConfig {
    fn base(&self, value: String) -> Cookie<'static> {
        Cookie::build(ADMIN_SESSION_COOKIE, value)
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .finish()
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = self.base(token);
        cookie.set_max_age(Duration::seconds(self.max_age_secs));
        cookie
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie
    }
}

/// Session token from the `admin_token` cookie, else from `Authorization: Bearer`.
pub fn extract_admin_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ADMIN_SESSION_COOKIE) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}
