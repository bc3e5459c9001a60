//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스 연결과 서버 바인딩 관련 설정을 관리합니다.

use std::env;

/// 기본 MongoDB 연결 문자열
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/testdb";

/// URI에 데이터베이스 이름이 없을 때 사용하는 기본값
pub const DEFAULT_DATABASE_NAME: &str = "testdb";

/// 사용자 문서를 저장하는 기본 컬렉션 이름
pub const DEFAULT_USERS_COLLECTION: &str = "users";

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 워커 스레드 수. `None`이면 actix 기본값(물리 코어 수)을 사용합니다.
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 바인딩 주소 (기본값: "0.0.0.0")
    /// - `PORT`: 포트 번호 (기본값: 3000)
    /// - `WORKERS`: 워커 스레드 수 (선택)
    pub fn from_env() -> Self {
        Self {
            host: Self::host(),
            port: Self::port(),
            workers: env::var("WORKERS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok())
                .filter(|workers| *workers > 0),
        }
    }

    /// 서버가 바인딩할 포트를 반환합니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 명시적으로 지정된 데이터베이스 이름.
    /// `None`이면 URI에 포함된 데이터베이스 이름을 사용합니다.
    pub database_name: Option<String>,
    /// 사용자 컬렉션 이름
    pub users_collection: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `MONGODB_URI`: 연결 URI (기본값: `mongodb://localhost:27017/testdb`)
    /// - `DATABASE_NAME`: 데이터베이스 이름 (선택)
    /// - `USERS_COLLECTION`: 컬렉션 이름 (기본값: "users")
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string()),
            database_name: env::var("DATABASE_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty()),
            users_collection: env::var("USERS_COLLECTION")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USERS_COLLECTION.to_string()),
        }
    }

    /// 실제로 사용할 데이터베이스 이름을 결정합니다.
    ///
    /// 우선순위: `DATABASE_NAME` > URI의 기본 데이터베이스 > `testdb`
    pub fn resolve_database_name(&self, uri_default: Option<&str>) -> String {
        self.database_name
            .as_deref()
            .or(uri_default)
            .unwrap_or(DEFAULT_DATABASE_NAME)
            .to_string()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: None,
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: None,
        };

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_database_name_resolution() {
        let mut config = DatabaseConfig::default();

        assert_eq!(config.resolve_database_name(Some("testdb")), "testdb");
        assert_eq!(config.resolve_database_name(None), DEFAULT_DATABASE_NAME);

        config.database_name = Some("users_prod".to_string());
        assert_eq!(config.resolve_database_name(Some("testdb")), "users_prod");
    }

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();

        assert_eq!(config.uri, DEFAULT_MONGODB_URI);
        assert_eq!(config.users_collection, "users");
    }
}
