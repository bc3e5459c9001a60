//! # Domain Layer Module
//!
//! 엔티티와 DTO를 담는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장 문서와 스키마 규칙
//! └── dto       - 요청/응답 데이터 구조
//!      │
//!      ▼
//! Services → Repositories → MongoDB
//! ```
//!
//! ## 사용자 생성 흐름
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::{dto::users::CreateUserRequest, entities::users::{User, USER_SCHEMA}};
//!
//! request.validate()?;                       // 1. 본문 규칙 검사
//! let mut draft = request.into_document();   // 2. BSON 초안
//! USER_SCHEMA.apply(&mut draft)?;            // 3. 캐스팅, 기본값, 제약 검사
//! let user = User::from_document(draft)?;    // 4. 엔티티
//! ```

pub mod dto;
pub mod entities;
