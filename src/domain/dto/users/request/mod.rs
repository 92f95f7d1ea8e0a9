pub mod auth_request;
pub mod update_user;

pub use auth_request::{LoginRequest, RegisterRequest};
pub use update_user::UpdateUserRequest;
