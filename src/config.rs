//! Configuration Module
//!
//! 환경변수 기반 설정. 프로세스 시작 시 한 번 생성해서 `AppState`와
//! `Database`에 명시적으로 전달한다 (모듈 전역 싱글턴 없음).
//!
//! 모든 값은 기본값이 있으므로 환경변수 없이도 기동 가능.
//! 숫자 값(`PORT`, `MYSQL_PORT`, `MYSQL_ACQUIRE_TIMEOUT_SECS`) 파싱 실패는
//! 시작 시점에 바로 실패한다.
//!
//! 바인드 주소는 항상 모든 인터페이스(0.0.0.0). `HOST`는 읽지 않는다.

use std::env;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::mysql::MySqlConnectOptions;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트 (기본값: 5000)
    pub port: u16,

    /// MySQL 접속 정보
    pub mysql: MySqlConfig,
}

/// MySQL 접속 정보
///
/// `Debug` 출력에서 password는 가려진다.
#[derive(Clone, PartialEq, Eq)]
pub struct MySqlConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    /// 풀에서 커넥션을 얻기까지 최대 대기 시간 (sqlx 기본값 30초)
    pub acquire_timeout: Duration,
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            host: "mysql-db".to_string(),
            user: "root".to_string(),
            password: "admin123".to_string(),
            database: "bluevault_db".to_string(),
            port: 3306,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl fmt::Debug for MySqlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl MySqlConfig {
    /// sqlx 접속 옵션으로 변환
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 서버 포트 (기본값: 5000)
    /// - `MYSQL_HOST`: 기본값 `mysql-db`
    /// - `MYSQL_USER`: 기본값 `root`
    /// - `MYSQL_PASSWORD`: 기본값 `admin123`
    /// - `MYSQL_DATABASE`: 기본값 `bluevault_db`
    /// - `MYSQL_PORT`: 기본값 `3306`
    /// - `MYSQL_ACQUIRE_TIMEOUT_SECS`: 기본값 `30`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 key → value 조회 함수로 설정 생성
    ///
    /// 테스트에서 프로세스 환경을 건드리지 않기 위해 분리.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MySqlConfig::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {raw:?}"))?,
            None => 5000,
        };

        let mysql_port = match lookup("MYSQL_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MYSQL_PORT must be a valid number, got {raw:?}"))?,
            None => defaults.port,
        };

        let acquire_timeout = match lookup("MYSQL_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Duration::from_secs)
                .with_context(|| {
                    format!("MYSQL_ACQUIRE_TIMEOUT_SECS must be a valid number, got {raw:?}")
                })?,
            None => defaults.acquire_timeout,
        };

        Ok(Config {
            port,
            mysql: MySqlConfig {
                host: lookup("MYSQL_HOST").unwrap_or(defaults.host),
                user: lookup("MYSQL_USER").unwrap_or(defaults.user),
                password: lookup("MYSQL_PASSWORD").unwrap_or(defaults.password),
                database: lookup("MYSQL_DATABASE").unwrap_or(defaults.database),
                port: mysql_port,
                acquire_timeout,
            },
        })
    }

    /// 리스닝 주소
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
