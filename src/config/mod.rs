//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리하는 모듈입니다.
//! 모든 값에는 로컬 개발용 기본값이 있으므로 설정 없이도 실행됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export WORKERS="4"
//!
//! # MongoDB 설정
//! export MONGODB_URI="mongodb://localhost:27017/testdb"
//! export DATABASE_NAME="testdb"
//! export USERS_COLLECTION="users"
//! ```
//!
//! `.env` 파일은 `PROFILE` 값에 따라 `main`에서 로드됩니다
//! (`dev` → `.env.dev`, `prod` → `.env.prod`, 그 외 `.env`).

pub mod data_config;

pub use data_config::*;
