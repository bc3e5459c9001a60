//! 라우트 설정 모듈
//!
//! 애플리케이션의 모든 HTTP 경로를 한곳에서 등록합니다.
//!
//! | 경로 | 설명 |
//! |------|------|
//! | `GET /health` | 헬스체크 |
//! | `/users` | 사용자 API |
//! | `GET /api-docs` | Swagger UI (`/api-docs/`로 리다이렉트) |
//! | `GET /api-docs/openapi.json` | OpenAPI 문서 |

use actix_web::{HttpResponse, web};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::errors::AppError;
use crate::docs::ApiDoc;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(user_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 파싱 실패는 { "error": "..." } 형태의 400으로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("잘못된 JSON 본문: {}", err);
        AppError::BadRequest(err.to_string()).into()
    }));

    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_docs_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /users` - 목록 조회
/// - `GET /users/{id}` - 단건 조회
/// - `POST /users` - 생성
/// - `DELETE /users/{id}` - 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user),
    );
}

/// API 문서 라우트를 설정합니다
fn configure_docs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/api-docs", "/api-docs/"));
    cfg.service(
        SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is running"))
)]
#[actix_web::get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "users_api");
    }

    #[actix_web::test]
    async fn test_api_docs_routes() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api-docs").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_redirection());

        let req = test::TestRequest::get().uri("/api-docs/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let doc: Value = test::call_and_read_body_json(&app, req).await;
        assert!(doc["paths"]["/users"].is_object());
        assert!(doc["paths"]["/users/{id}"].is_object());
    }
}
