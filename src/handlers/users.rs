//! 사용자 HTTP 핸들러
//!
//! `/users` 스코프 아래에 등록됩니다. 목록, 단건 조회, 삭제는 클라이언트가
//! 기대하는 고유한 실패 본문을 핸들러에서 직접 구성하고,
//! 생성은 [`AppError`]의 `ResponseError` 매핑을 그대로 사용합니다.

use actix_web::{HttpResponse, delete, get, post, web};
use validator::Validate;

use crate::core::errors::{AppError, FieldError};
use crate::domain::dto::users::request::{
    CREATE_USER_FIELDS, CreateUserPayload, CreateUserRequest, ListUsersQuery,
};
use crate::domain::dto::users::response::{
    DeleteErrorResponse, DeleteNotFoundResponse, DeleteResponse, ErrorFlagResponse,
    ErrorMessageResponse, NotFoundResponse, UserEnvelope, UserListResponse,
    ValidationErrorResponse,
};
use crate::services::users::UserService;

/// 사용자 목록 조회
///
/// 어떤 실패든 `404 { "error": true }`로 응답합니다.
/// `skip`/`limit`을 해석할 수 없으면 무시하고 전체 목록을 반환합니다.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "All users", body = UserListResponse),
        (status = 404, description = "Users could not be loaded", body = ErrorFlagResponse)
    )
)]
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    params: Option<web::Query<ListUsersQuery>>,
) -> HttpResponse {
    let params = params.map(web::Query::into_inner).unwrap_or_default();

    match service.list_users(&params).await {
        Ok(users) => HttpResponse::Ok().json(UserListResponse::new(users)),
        Err(e) => {
            log::error!("사용자 목록 조회 실패: {}", e);
            HttpResponse::NotFound().json(ErrorFlagResponse { error: true })
        }
    }
}

/// ID로 사용자 조회
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (24 hex characters)")),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, description = "User not found", body = NotFoundResponse)
    )
)]
#[get("/{id}")]
pub async fn get_user(service: web::Data<UserService>, id: web::Path<String>) -> HttpResponse {
    let not_found = || {
        HttpResponse::NotFound().json(NotFoundResponse {
            message: "user not found".to_string(),
            error: true,
        })
    };

    match service.get_user(&id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserEnvelope::from(user)),
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("사용자 조회 실패: id={}, {}", id, e);
            not_found()
        }
    }
}

/// 사용자 생성
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(content(
        (CreateUserRequest = "application/json"),
        (CreateUserRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "User created", body = UserEnvelope),
        (status = 400, description = "Invalid request body", body = ValidationErrorResponse),
        (status = 500, description = "Schema violation or database error", body = ErrorMessageResponse)
    )
)]
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: CreateUserPayload,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.0.validate().map_err(|e| {
        AppError::ValidationError(FieldError::from_validation(&e, CREATE_USER_FIELDS))
    })?;

    let user = service
        .create_user(payload.into_inner())
        .await
        .inspect_err(|e| log::error!("사용자 생성 실패: {}", e))?;

    Ok(HttpResponse::Ok().json(UserEnvelope::from(user)))
}

/// ID로 사용자 삭제
///
/// ObjectId 형식이 아닌 ID는 저장소 오류와 같은 500 응답이 됩니다.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (24 hex characters)")),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found", body = DeleteNotFoundResponse),
        (status = 500, description = "Malformed id or database error", body = DeleteErrorResponse)
    )
)]
#[delete("/{id}")]
pub async fn delete_user(service: web::Data<UserService>, id: web::Path<String>) -> HttpResponse {
    match service.delete_user(&id).await {
        Ok(outcome) if outcome.deleted_count == 0 => {
            HttpResponse::NotFound().json(DeleteNotFoundResponse {
                error: "User not found".to_string(),
                success: false,
            })
        }
        Ok(outcome) => HttpResponse::Ok().json(DeleteResponse::new(outcome.deleted_count)),
        Err(e) => {
            log::error!("사용자 삭제 실패: id={}, {}", id, e);
            HttpResponse::InternalServerError().json(DeleteErrorResponse {
                error: true,
                success: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use async_trait::async_trait;
    use mongodb::bson::{Document, oid::ObjectId};
    use serde_json::{Value, json};

    use crate::core::errors::AppResult;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::{
        DeleteOutcome, InMemoryUserRepository, UserField, UserQuery, UserStore,
    };
    use crate::routes::configure_all_routes;
    use crate::services::users::UserService;

    use super::AppError;

    /// 모든 호출이 데이터베이스 오류로 끝나는 저장소
    struct FailingStore;

    fn unavailable() -> AppError {
        AppError::DatabaseError("connection refused".to_string())
    }

    #[async_trait]
    impl UserStore for FailingStore {
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Err(unavailable())
        }
        async fn find(&self, _: &UserQuery) -> AppResult<Vec<User>> {
            Err(unavailable())
        }
        async fn find_projected(&self, _: &UserQuery, _: &[UserField]) -> AppResult<Vec<Document>> {
            Err(unavailable())
        }
        async fn find_by_id(&self, _: &ObjectId) -> AppResult<Option<User>> {
            Err(unavailable())
        }
        async fn insert(&self, _: User) -> AppResult<User> {
            Err(unavailable())
        }
        async fn replace(&self, _: User) -> AppResult<bool> {
            Err(unavailable())
        }
        async fn delete_by_id(&self, _: &ObjectId) -> AppResult<DeleteOutcome> {
            Err(unavailable())
        }
    }

    macro_rules! app_with {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new(UserService::new(Arc::new($store))))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    macro_rules! create {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/users")
                .set_json($body)
                .to_request();
            test::call_service(&$app, req).await
        }};
    }

    #[actix_web::test]
    async fn test_list_empty_collection() {
        let app = app_with!(InMemoryUserRepository::new());

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "users": [], "success": true }));
    }

    #[actix_web::test]
    async fn test_create_valid_user() {
        let app = app_with!(InMemoryUserRepository::new());

        let resp = create!(app, json!({ "first_name": " Ali ", "last_name": "Rezaei", "age": 30 }));
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["first_name"], "ali");
        assert_eq!(body["user"]["age"], 30);
        assert_eq!(body["user"]["admin"], false);
        assert_eq!(body["user"]["favorites"], json!([]));
        assert_eq!(body["user"]["_id"].as_str().map(str::len), Some(24));
    }

    #[actix_web::test]
    async fn test_create_missing_age() {
        let app = app_with!(InMemoryUserRepository::new());

        let resp = create!(app, json!({ "first_name": "Ali", "last_name": "Rezaei" }));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "errors": [
                { "type": "field", "msg": "The age is required", "path": "age", "location": "body" }
            ] })
        );
    }

    #[actix_web::test]
    async fn test_create_non_numeric_age() {
        let app = app_with!(InMemoryUserRepository::new());

        let resp = create!(app, json!({ "first_name": "Ali", "last_name": "Rezaei", "age": "abc" }));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["msg"], "The age must be a number");
        assert_eq!(body["errors"][0]["value"], "abc");
    }

    #[actix_web::test]
    async fn test_create_age_out_of_range() {
        let app = app_with!(InMemoryUserRepository::new());

        let resp = create!(app, json!({ "first_name": "Ali", "last_name": "Rezaei", "age": 5 }));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "User validation failed: age: Path `age` (5) is less than minimum allowed value (8)."
        );
    }

    #[actix_web::test]
    async fn test_create_short_last_name() {
        let app = app_with!(InMemoryUserRepository::new());

        let resp = create!(app, json!({ "first_name": "Ali", "last_name": "Al", "age": 30 }));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("last_name"));
    }

    #[actix_web::test]
    async fn test_create_malformed_json() {
        let app = app_with!(InMemoryUserRepository::new());

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"first_name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_get_unknown_and_malformed_id() {
        let app = app_with!(InMemoryUserRepository::new());

        for id in [ObjectId::new().to_hex(), "not-an-id".to_string()] {
            let req = test::TestRequest::get().uri(&format!("/users/{id}")).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "message": "user not found", "error": true }));
        }
    }

    #[actix_web::test]
    async fn test_delete_unknown_id() {
        let app = app_with!(InMemoryUserRepository::new());

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", ObjectId::new().to_hex()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "User not found", "success": false }));
    }

    #[actix_web::test]
    async fn test_create_get_delete_round() {
        let app = app_with!(InMemoryUserRepository::new());

        let created: Value = test::read_body_json(create!(
            app,
            json!({ "first_name": "Ali", "last_name": "Rezaei", "age": "42" })
        ))
        .await;
        let id = created["user"]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri(&format!("/users/{id}")).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["user"]["_id"], id.as_str());
        assert_eq!(fetched["success"], true);

        let req = test::TestRequest::delete().uri(&format!("/users/{id}")).to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            deleted,
            json!({ "user": { "acknowledged": true, "deletedCount": 1 }, "success": true })
        );

        let req = test::TestRequest::get().uri(&format!("/users/{id}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_with_skip_and_limit() {
        let app = app_with!(InMemoryUserRepository::new());
        for name in ["ali", "sara", "reza"] {
            let resp = create!(app, json!({ "first_name": name, "last_name": "Rezaei", "age": 30 }));
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/users?skip=1&limit=1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["first_name"], "sara");
    }

    #[actix_web::test]
    async fn test_list_ignores_unparseable_range() {
        let app = app_with!(InMemoryUserRepository::new());
        for name in ["ali", "sara"] {
            let resp = create!(app, json!({ "first_name": name, "last_name": "Rezaei", "age": 30 }));
            assert_eq!(resp.status(), StatusCode::OK);
        }

        for uri in ["/users?limit=abc", "/users?skip=-1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["users"].as_array().map(Vec::len), Some(2));
        }
    }

    #[actix_web::test]
    async fn test_delete_malformed_id() {
        let app = app_with!(InMemoryUserRepository::new());

        let req = test::TestRequest::delete().uri("/users/not-an-id").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": true, "success": false }));
    }

    #[actix_web::test]
    async fn test_create_form_body() {
        let app = app_with!(InMemoryUserRepository::new());

        let req = test::TestRequest::post()
            .uri("/users")
            .set_form([("first_name", "Ali"), ("last_name", "Rezaei"), ("age", "30")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["first_name"], "ali");
        assert_eq!(body["user"]["last_name"], "Rezaei");
        assert_eq!(body["user"]["age"], 30);
    }

    #[actix_web::test]
    async fn test_create_without_content_type() {
        let app = app_with!(InMemoryUserRepository::new());

        let req = test::TestRequest::post().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let paths: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["path"].as_str())
            .collect();
        assert_eq!(paths, vec!["first_name", "last_name", "age"]);
    }

    #[actix_web::test]
    async fn test_store_failures() {
        let app = app_with!(FailingStore);

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": true }));

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", ObjectId::new().to_hex()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", ObjectId::new().to_hex()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": true, "success": false }));

        let resp = create!(app, json!({ "first_name": "Ali", "last_name": "Rezaei", "age": 30 }));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Database error: connection refused");
    }
}
