mod login_admin;
mod logout_admin;
mod verify_admin_session;

pub use login_admin::{LoginAdminError, LoginAdminUseCase};
pub use logout_admin::{LogoutAdminError, LogoutAdminUseCase};
pub use verify_admin_session::{VerifyAdminSessionError, VerifyAdminSessionUseCase};
