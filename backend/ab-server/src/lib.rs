pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accidents::{
        accident_dto::AccidentDto,
        accident_request::AccidentRequest,
        accidents::{
            create_accident, delete_accident, get_accident, list_accidents, update_accident,
        },
    },
    auth::{
        auth::{current_user, google_login, login, register},
        auth_response::AuthResponse,
        google_login_request::GoogleLoginRequest,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        user_info::UserInfo,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::{AuthenticatedUser, MaybeAuthenticated},
};
pub use app_state::AppState;
pub use routes::{build_router, cors_layer};
