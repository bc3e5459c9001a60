//! 사용자 엔티티와 저장 스키마

pub mod schema;
pub mod user;

pub use schema::{SchemaValidationError, USER_SCHEMA};
pub use user::User;
