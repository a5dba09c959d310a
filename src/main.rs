//! BlueVault Loan API Server
//!
//! ```text
//! Client ──▶ Axum (/health, /submit-loan) ──▶ LoanRepository ──▶ MySQL
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bluevault_loan_api::{create_router, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    // RUST_LOG=debug,sqlx=warn 형태로 레벨 제어 가능
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bluevault_loan_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BlueVault Loan API Server");

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config.mysql);

    // 커넥션 풀 (lazy)
    let db = Arc::new(Database::connect_lazy(&config.mysql));

    // 기동 시 DB 상태만 확인. 백그라운드에서 돌리므로 리스닝을 막지 않는다
    let probe = db.clone();
    tokio::spawn(async move {
        match probe.ping().await {
            Ok(()) => tracing::info!("Database reachable"),
            Err(e) => tracing::warn!("Database not reachable at startup: {}", e),
        }
    });

    let state = AppState {
        repository: db.clone(),
    };
    let app = create_router(state);

    // 서버 시작
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
