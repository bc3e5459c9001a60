//! # Application Error Handling System
//!
//! 사용자 API 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 | 응답 본문 |
//! |------|-----------|-----------|
//! | `ValidationError` | 400 | `{ "errors": [FieldError, ...] }` |
//! | `BadRequest` | 400 | `{ "error": "..." }` |
//! | `NotFound` | 404 | `{ "error": "..." }` |
//! | `SchemaError` | 500 | `{ "error": "User validation failed: ..." }` |
//! | `DatabaseError` / `InternalError` | 500 | `{ "error": "..." }` |
//!
//! 목록/단건 조회/삭제 엔드포인트는 고유한 실패 본문을 가지므로
//! 핸들러에서 직접 응답을 구성합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(&self, id: &ObjectId) -> AppResult<Option<User>> {
//!     self.collection
//!         .find_one(doc! { "_id": id })
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::entities::users::schema::SchemaValidationError;

/// 요청 본문 필드 하나에 대한 검증 실패 항목
///
/// 클라이언트가 이미 사용 중인 응답 형식을 그대로 유지합니다.
///
/// ```json
/// { "type": "field", "value": "abc", "msg": "The age must be a number", "path": "age", "location": "body" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// 항상 `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// 클라이언트가 보낸 원본 값 (누락된 경우 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    /// 사람이 읽을 수 있는 메시지
    pub msg: String,
    /// 필드 이름
    pub path: String,
    /// 값의 위치 (`"body"`)
    pub location: String,
}

impl FieldError {
    pub fn body(path: &str, msg: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.to_string(),
            location: "body".to_string(),
        }
    }

    /// `validator::ValidationErrors`를 `order`에 나열된 필드 순서대로 펼칩니다.
    ///
    /// `ValidationErrors`는 내부적으로 해시맵이므로 응답 순서를 고정하려면
    /// 필드 순서를 별도로 받아야 합니다.
    pub fn from_validation(errors: &ValidationErrors, order: &[&'static str]) -> Vec<Self> {
        let field_errors = errors.field_errors();

        order
            .iter()
            .filter_map(|field| field_errors.get(*field).map(|errs| (*field, errs)))
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    let value = err.params.get("value").cloned();
                    FieldError::body(field, msg, value)
                })
            })
            .collect()
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 실패, 쿼리 실행 실패 등 MongoDB 드라이버가 돌려준 오류입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 본문 검증 에러 (400 Bad Request)
    #[error("Validation error: {} invalid field(s)", .0.len())]
    ValidationError(Vec<FieldError>),

    /// 요청 형식 자체가 잘못된 경우 (400 Bad Request)
    ///
    /// JSON 파싱 실패 등 필드 단위 검증 이전 단계의 오류입니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 저장 시점의 스키마 제약 위반 (500 Internal Server Error)
    ///
    /// 메시지는 `User validation failed: ...` 형식 그대로 클라이언트에 전달됩니다.
    #[error(transparent)]
    SchemaError(#[from] SchemaValidationError),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 필드 목록을, 나머지는 `{ "error": message }`를 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => serde_json::json!({ "errors": errors }),
            other => serde_json::json!({ "error": other.to_string() }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
