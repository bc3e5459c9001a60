//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 조회, 삭제와 내부용 수정/검색 기능을 제공합니다.
//! 저장 전 모든 문서는 `USER_SCHEMA`를 거칩니다.

pub mod user_service;

pub use user_service::UserService;
