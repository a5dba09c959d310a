//! Repository Pattern Implementation
//!
//! 라우트 핸들러는 `LoanRepository` trait에만 의존한다.
//! 운영 환경은 `Database`(MySQL), 테스트는 in-memory mock을 주입한다.

use async_trait::async_trait;

use crate::types::LoanApplication;

/// 대출 신청서 저장소 인터페이스
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// 신청서 한 건을 저장하고 commit. 생성된 id 반환
    async fn save(&self, application: &LoanApplication) -> Result<u64, sqlx::Error>;
}
