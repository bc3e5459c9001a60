//! 애플리케이션 핵심 인프라 모듈
//!
//! 전역 에러 타입([`AppError`])과 결과 별칭([`AppResult`])을 제공합니다.

pub mod errors;

pub use errors::*;
