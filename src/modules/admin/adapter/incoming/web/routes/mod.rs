mod login_admin;
mod logout_admin;
mod verify_admin_token;

pub use login_admin::{
    __path_login_admin_handler, login_admin_handler, LoginAdminRequest, LoginAdminResponse,
};
pub use logout_admin::{__path_logout_admin_handler, logout_admin_handler, LogoutAdminResponse};
pub use verify_admin_token::{
    __path_verify_admin_token_handler, verify_admin_token_handler, VerifyAdminTokenResponse,
};
