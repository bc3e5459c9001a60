//! OpenAPI 문서 정의
//!
//! 핸들러의 `#[utoipa::path]`와 DTO의 `ToSchema`로부터 문서를 생성합니다.
//! 생성된 문서는 `/api-docs/openapi.json`으로, Swagger UI는 `/api-docs/`로 제공됩니다.

use utoipa::OpenApi;

/// 사용자 API OpenAPI 문서
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create, list, fetch and delete user records stored in MongoDB."
    ),
    paths(
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::users::delete_user,
        crate::routes::health_check,
    ),
    tags(
        (name = "Users", description = "User record management"),
        (name = "Health", description = "Service health check")
    )
)]
pub struct ApiDoc;
