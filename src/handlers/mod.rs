//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 응답 DTO를 JSON으로 돌려주는
//! 핸들러들을 정의합니다. 모든 핸들러는 `web::Data<UserService>`를 추출하며,
//! 전역 상태에 접근하지 않습니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)   ← Web Layer
//!   ▼
//! Services             ← 비즈니스 로직
//!   ▼
//! Repositories         ← MongoDB / 메모리
//! ```
//!
//! 각 핸들러는 `#[utoipa::path]`로 OpenAPI 문서에 등록됩니다.
//!
//! ## 현재 구현된 핸들러
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 목록 조회 (`GET /users`)
//!   - 단건 조회 (`GET /users/{id}`)
//!   - 생성 (`POST /users`)
//!   - 삭제 (`DELETE /users/{id}`)

pub mod users;
