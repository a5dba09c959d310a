//! Loan Submission Endpoint
//!
//! Accepts a loan application as JSON, validates it and stores it through the
//! configured `LoanRepository`. The body is read as raw bytes so a missing or
//! wrong Content-Type header does not reject the request.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde::Serialize;

use crate::{error::ApiError, types::LoanApplication, AppState};

/// 접수 성공 응답
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

/// POST /submit-loan
///
/// # Flow
///
/// 1. 본문을 JSON으로 파싱 (실패/빈 값 → 400 InvalidPayload)
/// 2. 다섯 필드 trim 후 검증 (빈 값 → 400 MissingField)
/// 3. 저장소에 INSERT + commit (실패 → 500 DatabaseFailure)
///
/// # Request
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "contact": "555-1234",
///   "uid": "UID001",
///   "loanType": "personal",
///   "employment": "employed"
/// }
/// ```
pub async fn submit_loan(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    // 본문 크기 제한은 라우터에서 해제. 읽기 실패는 payload 문제가 아니다
    let body = body.map_err(|rejection| {
        ApiError::UnexpectedFailure(format!("failed to read request body: {rejection}"))
    })?;

    let application = LoanApplication::from_json_slice(&body)?;

    tracing::info!("Received loan application: {}", application);

    let id = state.repository.save(&application).await?;

    tracing::info!("Application inserted successfully (id={})", id);

    Ok(Json(SubmitResponse {
        message: "Application submitted successfully",
    }))
}
