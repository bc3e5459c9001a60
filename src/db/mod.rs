//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 클라이언트는 프로세스 시작 시 한 번 생성되며, 리포지토리가 이 핸들을
//! 공유합니다. 드라이버 내부의 연결 풀 외에 별도의 풀링이나 재시도는 없습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use users_api::config::DatabaseConfig;
//! use users_api::db::Database;
//!
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! if let Err(e) = database.ping().await {
//!     log::error!("MongoDB 연결 실패: {}", e);
//! }
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 클라이언트를 생성합니다.
    ///
    /// 드라이버는 지연 연결하므로 서버가 내려가 있어도 이 함수는 성공합니다.
    /// URI 형식이 잘못된 경우에만 에러를 반환합니다. 실제 연결 확인은
    /// [`Database::ping`]으로 합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (서버 로그에서 식별용)
        client_options.app_name = Some("users_api".to_string());

        let database_name =
            config.resolve_database_name(client_options.default_database.as_deref());

        let client = Client::with_options(client_options)?;

        info!("📡 MongoDB 클라이언트 생성: database={}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 서버에 `ping` 명령을 보내 연결 상태를 확인합니다.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.get_database()
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", self.database_name);
        Ok(())
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ```rust,ignore
    /// let users = database.get_database().collection::<User>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
