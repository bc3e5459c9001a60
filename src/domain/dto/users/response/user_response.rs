use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::FieldError;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 저장된 문서를 그대로 노출하되 `_id`는 16진수 문자열, `date`는 RFC 3339 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1d8a0012345678")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ali")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Rezaei")]
    pub last_name: Option<String>,

    pub favorites: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 30)]
    pub age: Option<i32>,

    #[schema(example = "2024-06-04T12:00:00Z")]
    pub date: String,

    pub admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            salary,
            last_name,
            favorites,
            age,
            date,
            admin,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            salary,
            last_name,
            favorites,
            age,
            date: date
                .try_to_rfc3339_string()
                .unwrap_or_else(|_| date.to_string()),
            admin,
        }
    }
}

/// `GET /users` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub success: bool,
}

impl UserListResponse {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponse::from).collect(),
            success: true,
        }
    }
}

/// 단건 조회 및 생성 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
    pub success: bool,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self {
            user: UserResponse::from(user),
            success: true,
        }
    }
}

/// 삭제 결과 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResultBody {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// `DELETE /users/{id}` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub user: DeleteResultBody,
    pub success: bool,
}

impl DeleteResponse {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            user: DeleteResultBody {
                acknowledged: true,
                deleted_count,
            },
            success: true,
        }
    }
}

/// 목록 조회 실패 응답 (`{ "error": true }`)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorFlagResponse {
    pub error: bool,
}

/// 단건 조회 실패 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotFoundResponse {
    #[schema(example = "user not found")]
    pub message: String,
    pub error: bool,
}

/// 삭제 대상 없음 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteNotFoundResponse {
    #[schema(example = "User not found")]
    pub error: String,
    pub success: bool,
}

/// 삭제 중 저장소 오류 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteErrorResponse {
    pub error: bool,
    pub success: bool,
}

/// 일반 오류 응답 (`{ "error": "..." }`)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessageResponse {
    #[schema(example = "User validation failed: age: Path `age` (5) is less than minimum allowed value (8).")]
    pub error: String,
}

/// 요청 본문 검증 실패 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, oid::ObjectId};

    fn sample_user() -> User {
        User {
            id: Some(ObjectId::new()),
            first_name: Some("ali".to_string()),
            salary: None,
            last_name: Some("Rezaei".to_string()),
            favorites: vec!["sport".to_string()],
            age: Some(30),
            date: DateTime::from_millis(0),
            admin: false,
        }
    }

    #[test]
    fn test_user_response_shape() {
        let user = sample_user();
        let id = user.id_string().unwrap();
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["_id"], id);
        assert_eq!(json["first_name"], "ali");
        assert_eq!(json["date"], "1970-01-01T00:00:00Z");
        assert!(json.get("salary").is_none());
        assert_eq!(json["admin"], false);
    }

    #[test]
    fn test_delete_response_shape() {
        let json = serde_json::to_value(DeleteResponse::new(1)).unwrap();

        assert_eq!(json["user"]["acknowledged"], true);
        assert_eq!(json["user"]["deletedCount"], 1);
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_list_response_wraps_users() {
        let json = serde_json::to_value(UserListResponse::new(vec![sample_user()])).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["users"].as_array().unwrap().len(), 1);
    }
}
