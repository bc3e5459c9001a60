//! # Domain Entities Module
//!
//! MongoDB 컬렉션에 저장되는 문서 구조와, 저장 전에 문서에 적용되는
//! 스키마 규칙을 정의합니다.
//!
//! ```text
//! entities/
//! └── users/
//!     ├── user.rs     ← User 엔티티
//!     └── schema.rs   ← 필드 스키마 (캐스팅, 변환, 기본값, 검증)
//! ```

pub mod users;
