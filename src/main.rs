//! 사용자 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. MongoDB 클라이언트를 한 번 만들고
//! `UserService`에 담아 모든 워커에 `web::Data`로 공유합니다.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use log::{error, info};

use users_api::config::{DatabaseConfig, ServerConfig};
use users_api::db::Database;
use users_api::repositories::users::MongoUserRepository;
use users_api::routes::configure_all_routes;
use users_api::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_status = load_env_file();
    init_logging();
    info!("{}", env_status);

    info!("🚀 사용자 API 서비스 시작중...");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let user_service = initialize_user_service(&database_config).await?;

    start_http_server(server_config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: ServerConfig,
    user_service: web::Data<UserService>,
) -> std::io::Result<()> {
    let bind_address = config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/api-docs", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            // 요청 로그: 메서드/경로 상태 크기 - 처리 시간
            .wrap(middleware::Logger::new("%r %s %b - %D ms"))
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?;

    let server = match config.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 반환하고, 호출자가 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    match dotenv::from_filename(filename) {
        Ok(_) => format!("⚙️ {} 파일 로드 됨 (profile: {:?})", filename, profile),
        Err(e) => format!("⚙️ {} 파일 로드 실패: {} (환경 변수만 사용)", filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=users_api::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 클라이언트를 만들고 사용자 서비스를 구성합니다
///
/// 연결 문자열이 잘못된 경우에만 실패합니다. 서버가 응답하지 않으면
/// 에러를 기록하고 계속 진행하며, 이후 요청이 저장소 오류로 응답합니다.
async fn initialize_user_service(
    config: &DatabaseConfig,
) -> std::io::Result<web::Data<UserService>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(config).await.map_err(|e| {
        error!("❌ MongoDB 클라이언트 생성 실패: {}", e);
        std::io::Error::other(e)
    })?;

    if let Err(e) = database.ping().await {
        error!("❌ MongoDB 연결 실패: {}", e);
    }

    let repository = MongoUserRepository::new(&database, &config.users_collection);
    info!(
        "✅ 사용자 저장소 준비: {}.{}",
        database.database_name(),
        config.users_collection
    );

    Ok(web::Data::new(UserService::new(Arc::new(repository))))
}
