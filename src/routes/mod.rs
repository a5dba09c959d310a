//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크
//! - `/submit-loan` - 대출 신청 접수

pub mod health;
pub mod loan;
