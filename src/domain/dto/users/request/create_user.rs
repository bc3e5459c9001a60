//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 본문을 표현합니다. 값은 클라이언트가 보낸 JSON 그대로
//! 보관하고, 검증은 [`CREATE_USER_RULES`] 규칙 테이블로 수행합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `first_name` | 비어 있지 않음 | The first_name is required |
//! | `last_name` | 비어 있지 않음 | The last_name is required |
//! | `age` | 비어 있지 않음 | The age is required |
//! | `age` | 숫자 형식 | The age must be a number |
//!
//! 필드가 아예 없으면 "비어 있지 않음" 규칙만 실패합니다.
//! 빈 문자열처럼 값은 있지만 비어 있으면 같은 필드의 모든 규칙이 평가됩니다.
//!
//! 규칙을 통과한 값은 [`CreateUserRequest::into_document`]로 BSON 초안이 되고,
//! 이후 저장 스키마에서 캐스팅과 범위 검사를 받습니다.
//!
//! 본문은 JSON과 `application/x-www-form-urlencoded` 모두 받으며,
//! [`CreateUserPayload`] 추출자가 형식을 고릅니다.

use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures_util::future::{LocalBoxFuture, ready};
use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::string_utils::{is_numeric, value_to_string};

/// 본문 필드 하나에 적용되는 검사 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyCheck {
    /// 문자열 표현이 비어 있지 않아야 함
    NotEmpty,
    /// 문자열 표현이 십진수 형식이어야 함
    Numeric,
}

impl BodyCheck {
    fn code(self) -> &'static str {
        match self {
            BodyCheck::NotEmpty => "required",
            BodyCheck::Numeric => "numeric",
        }
    }

    fn passes(self, raw: &str) -> bool {
        match self {
            BodyCheck::NotEmpty => !raw.is_empty(),
            BodyCheck::Numeric => is_numeric(raw),
        }
    }
}

/// 본문 검증 규칙
#[derive(Debug, Clone, Copy)]
pub struct BodyRule {
    pub field: &'static str,
    pub check: BodyCheck,
    pub message: &'static str,
}

/// 사용자 생성 요청 규칙 (평가 순서 그대로)
pub const CREATE_USER_RULES: &[BodyRule] = &[
    BodyRule {
        field: "first_name",
        check: BodyCheck::NotEmpty,
        message: "The first_name is required",
    },
    BodyRule {
        field: "last_name",
        check: BodyCheck::NotEmpty,
        message: "The last_name is required",
    },
    BodyRule {
        field: "age",
        check: BodyCheck::NotEmpty,
        message: "The age is required",
    },
    BodyRule {
        field: "age",
        check: BodyCheck::Numeric,
        message: "The age must be a number",
    },
];

/// 에러 응답에서 필드가 나열되는 순서
pub const CREATE_USER_FIELDS: &[&str] = &["first_name", "last_name", "age"];

/// 새 사용자 생성 요청
///
/// # JSON 예제
///
/// ```json
/// { "first_name": "Ali", "last_name": "Rezaei", "age": 30 }
/// ```
///
/// 위 세 필드 외의 키는 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Ali")]
    pub first_name: Option<Value>,

    #[serde(default)]
    #[schema(value_type = String, example = "Rezaei")]
    pub last_name: Option<Value>,

    /// 숫자 또는 숫자 문자열
    #[serde(default)]
    #[schema(value_type = i32, example = 30)]
    pub age: Option<Value>,
}

impl CreateUserRequest {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "first_name" => self.first_name.as_ref(),
            "last_name" => self.last_name.as_ref(),
            "age" => self.age.as_ref(),
            _ => None,
        }
    }

    /// 저장 스키마에 넘길 문서 초안을 만듭니다. 값이 없는 필드는 생략됩니다.
    pub fn into_document(self) -> Document {
        let mut draft = Document::new();
        for (name, value) in [
            ("first_name", self.first_name),
            ("last_name", self.last_name),
            ("age", self.age),
        ] {
            if let Some(value) = value {
                draft.insert(name, json_to_bson(value));
            }
        }
        draft
    }
}

type JsonOrForm = web::Either<web::Json<CreateUserRequest>, web::Form<CreateUserRequest>>;

/// `POST /users` 본문 추출자
///
/// JSON을 먼저 시도하고 실패하면 폼 본문으로 읽습니다.
/// `Content-Type`이 없으면 빈 본문으로 보고 모든 필드가 비어 있는 요청이 됩니다.
#[derive(Debug, Clone, Default)]
pub struct CreateUserPayload(pub CreateUserRequest);

impl CreateUserPayload {
    pub fn into_inner(self) -> CreateUserRequest {
        self.0
    }
}

impl FromRequest for CreateUserPayload {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            return Box::pin(ready(Ok(Self::default())));
        }

        let body = JsonOrForm::from_request(req, payload);
        Box::pin(async move {
            let request = match body.await? {
                web::Either::Left(json) => json.into_inner(),
                web::Either::Right(form) => form.into_inner(),
            };
            Ok(Self(request))
        })
    }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for rule in CREATE_USER_RULES {
            let value = self.field(rule.field);

            let passed = match value {
                Some(value) => rule.check.passes(&value_to_string(value)),
                // 누락된 필드는 필수 규칙만 실패로 봅니다.
                None => rule.check != BodyCheck::NotEmpty,
            };
            if passed {
                continue;
            }

            let mut error =
                ValidationError::new(rule.check.code()).with_message(rule.message.into());
            if let Some(value) = value {
                error.add_param("value".into(), value);
            }
            errors.add(rule.field, error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// JSON 값을 BSON으로 변환합니다. 정수는 `Int64`, 나머지 숫자는 `Double`이 됩니다.
fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Bson::Int64(i),
            None => n.as_f64().map(Bson::Double).unwrap_or(Bson::Null),
        },
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(
            map.into_iter()
                .map(|(key, value)| (key, json_to_bson(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FieldError;
    use serde_json::json;

    fn request(body: Value) -> CreateUserRequest {
        serde_json::from_value(body).unwrap()
    }

    fn field_errors(body: Value) -> Vec<FieldError> {
        let errors = request(body).validate().unwrap_err();
        FieldError::from_validation(&errors, CREATE_USER_FIELDS)
    }

    #[test]
    fn test_valid_request() {
        assert!(
            request(json!({ "first_name": "Ali", "last_name": "Rezaei", "age": 30 }))
                .validate()
                .is_ok()
        );
        assert!(
            request(json!({ "first_name": "Ali", "last_name": "Rezaei", "age": "30" }))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_missing_age_reports_required_only() {
        let errors = field_errors(json!({ "first_name": "Ali", "last_name": "Rezaei" }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "age");
        assert_eq!(errors[0].msg, "The age is required");
        assert!(errors[0].value.is_none());
    }

    #[test]
    fn test_empty_age_reports_both_rules() {
        let errors = field_errors(json!({ "first_name": "Ali", "last_name": "Rezaei", "age": "" }));
        let messages: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();

        assert_eq!(messages, vec!["The age is required", "The age must be a number"]);
        assert_eq!(errors[0].value, Some(json!("")));
    }

    #[test]
    fn test_non_numeric_age() {
        let errors = field_errors(json!({ "first_name": "Ali", "last_name": "Rezaei", "age": "abc" }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "The age must be a number");
        assert_eq!(errors[0].value, Some(json!("abc")));
        assert_eq!(errors[0].location, "body");
    }

    #[test]
    fn test_errors_follow_field_order() {
        let errors = field_errors(json!({}));
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();

        assert_eq!(paths, vec!["first_name", "last_name", "age"]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let errors = field_errors(json!({ "first_name": null, "last_name": "Rezaei", "age": 30 }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "first_name");
    }

    #[test]
    fn test_into_document_keeps_raw_values() {
        let draft = request(json!({ "first_name": "Ali", "age": 30, "extra": true })).into_document();

        assert_eq!(draft.get_str("first_name").unwrap(), "Ali");
        assert_eq!(draft.get_i64("age").unwrap(), 30);
        assert!(!draft.contains_key("last_name"));
        assert!(!draft.contains_key("extra"));
    }
}
