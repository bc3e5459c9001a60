//! 사용자 요청 DTO

pub mod create_user;
pub mod list_users;

pub use create_user::{CreateUserPayload, CreateUserRequest, CREATE_USER_FIELDS, CREATE_USER_RULES};
pub use list_users::ListUsersQuery;
