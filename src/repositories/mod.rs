//! 데이터 액세스 계층
//!
//! 저장소 trait과 구현체를 제공합니다. 서비스는 구체 타입 대신
//! `Arc<dyn UserStore>`를 받아 사용합니다.

pub mod users;
