//! Health Check Endpoint
//!
//! Liveness probe 전용. DB를 조회하지 않으므로 DB 장애와 무관하게 항상 200.

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
