//! Database Module
//!
//! MySQL 영속화 어댑터.
//!
//! 요청마다 풀에서 커넥션을 하나 꺼내 트랜잭션 안에서 INSERT 한 번을 실행하고
//! commit 한다. `Transaction`은 drop 시 rollback 후 커넥션을 풀에 반납하므로
//! 에러로 조기 반환해도 커넥션이 새지 않는다.
//!
//! 풀은 lazy 하게 생성한다. 기동 시점에 DB가 없어도 서버는 뜨고,
//! `/health`는 DB 상태와 무관하게 응답한다.

mod repository;

pub use repository::LoanRepository;
#[cfg(test)]
pub use repository::mock;

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::MySqlConfig;
use crate::types::LoanApplication;

const INSERT_LOAN_APPLICATION: &str = r#"
    INSERT INTO loan_applications (name, contact, uid, loan_type, employment)
    VALUES (?, ?, ?, ?, ?)
"#;

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// 커넥션 풀 생성 (실제 접속은 첫 요청 시)
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 10
    /// - acquire_timeout: `MySqlConfig::acquire_timeout` (초과 시 DatabaseFailure)
    pub fn connect_lazy(config: &MySqlConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options());

        Self { pool }
    }

    /// Health check
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// 대출 신청서 저장, 생성된 row id 반환
    pub async fn insert_application(
        &self,
        application: &LoanApplication,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(INSERT_LOAN_APPLICATION)
            .bind(application.name())
            .bind(application.contact())
            .bind(application.uid())
            .bind(application.loan_type())
            .bind(application.employment())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.last_insert_id())
    }

    /// 풀 종료 (graceful shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl LoanRepository for Database {
    async fn save(&self, application: &LoanApplication) -> Result<u64, sqlx::Error> {
        self.insert_application(application).await
    }
}
