//! 공통 유틸리티 함수 모듈
//!
//! 요청 값 변환, 숫자 형식 판별, 정규식 이스케이프 등
//! 여러 계층에서 함께 쓰는 문자열 처리 함수들을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{is_numeric, value_to_string};
//!
//! let raw = value_to_string(&serde_json::json!(25));
//! assert!(is_numeric(&raw));
//! ```

pub mod string_utils;
