//! 사용자 API 서비스
//!
//! MongoDB에 저장된 사용자 레코드를 생성, 조회, 삭제하는 REST API입니다.
//! OpenAPI 문서와 Swagger UI를 `/api-docs`에서 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록 조회, ID 조회, 생성, 삭제
//! - **요청 검증**: 필드별 에러 목록을 담은 400 응답
//! - **저장 스키마**: 캐스팅, 변환, 기본값, 제약 검사
//! - **MongoDB**: 사용자 데이터 영구 저장 (테스트용 메모리 저장소 포함)
//! - **OpenAPI**: utoipa 기반 문서 자동 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + /api-docs
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 스키마 적용
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use users_api::repositories::users::InMemoryUserRepository;
//! use users_api::routes::configure_all_routes;
//! use users_api::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod docs;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
