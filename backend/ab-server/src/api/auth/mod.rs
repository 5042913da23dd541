#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_response;
pub mod google_login_request;
pub mod login_request;
pub mod register_request;
pub mod user_info;
