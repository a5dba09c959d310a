//! BlueVault Loan API Library
//!
//! # Overview
//!
//! 대출 신청서를 HTTP로 받아 MySQL `loan_applications` 테이블에 저장하는
//! 백엔드 API.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     API                      │
//! │                                              │
//! │  ┌─────────┐   ┌─────────┐   ┌─────────┐     │
//! │  │ Routes  │──▶│  Types  │   │ Config  │     │
//! │  └────┬────┘   └─────────┘   └────┬────┘     │
//! │       │                           │          │
//! │       ▼                           ▼          │
//! │  ┌──────────────────────────────────────┐    │
//! │  │     DB (LoanRepository / MySQL)      │    │
//! │  └──────────────────────────────────────┘    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 HTTP 매핑
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `db`: MySQL 영속화 어댑터
//! - `types`: 도메인 타입 (`LoanApplication`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bluevault_loan_api::{create_router, AppState, Config, Database};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect_lazy(&config.mysql);
//!     let app = create_router(AppState { repository: Arc::new(db) });
//!
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::{Database, LoanRepository};
pub use error::ApiError;
pub use types::LoanApplication;

/// 애플리케이션 전역 상태
///
/// 요청 간 공유되는 것은 불변 저장소 핸들 뿐이다.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn LoanRepository>,
}

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET  /health        - 서버 상태 확인 (항상 "OK")
/// POST /submit-loan   - 대출 신청 접수
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/submit-loan", post(routes::loan::submit_loan))
        // 미들웨어
        // 신청서 본문 크기 제한 없음 (axum 기본값 2MB 해제)
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        // 상태 주입
        .with_state(state)
}

/// 핸들러 panic → 500 Internal server error
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::UnexpectedFailure(format!("handler panicked: {detail}")).into_response()
}
