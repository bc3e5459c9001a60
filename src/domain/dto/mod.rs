//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 데이터 구조를 정의합니다.
//! 요청 DTO는 검증 규칙을, 응답 DTO는 클라이언트가 받는 JSON 형태와
//! OpenAPI 스키마(`utoipa::ToSchema`)를 함께 가집니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/    # CreateUserRequest, ListUsersQuery
//!     └── response/   # UserResponse 및 응답 봉투 타입
//! ```

pub mod users;

pub use users::*;
