//! 사용자 응답 DTO

pub mod user_response;

pub use user_response::{
    DeleteErrorResponse, DeleteNotFoundResponse, DeleteResponse, DeleteResultBody,
    ErrorFlagResponse, ErrorMessageResponse, NotFoundResponse, UserEnvelope, UserListResponse,
    UserResponse, ValidationErrorResponse,
};
