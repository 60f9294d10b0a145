mod login_admin_service;
mod logout_admin_service;
mod verify_admin_session_service;

#[cfg(test)]
mod test_doubles;

pub use login_admin_service::LoginAdminService;
pub use logout_admin_service::LogoutAdminService;
pub use verify_admin_session_service::VerifyAdminSessionService;
