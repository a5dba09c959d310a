//! Error Handling Module
//!
//! Maps every failure of the submission path onto one of four fixed
//! client-facing messages. Internal detail (database error text, panics) is
//! logged server-side with tracing and never serialized into the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API 에러 타입
///
/// - 400: 요청 본문 문제 (`InvalidPayload`, `MissingField`)
/// - 500: 서버 측 문제 (`DatabaseFailure`, `UnexpectedFailure`)
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Invalid or empty JSON payload")]
    InvalidPayload,

    #[error("All fields are required")]
    MissingField,

    // ============ 500 Internal Server Error ============
    #[error("Database error: {0}")]
    DatabaseFailure(String),

    #[error("Unexpected error: {0}")]
    UnexpectedFailure(String),
}

/// API 에러 응답 구조
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload | ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::DatabaseFailure(_) | ApiError::UnexpectedFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 클라이언트에 노출되는 고정 메시지
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidPayload => "Invalid or empty JSON payload",
            ApiError::MissingField => "All fields are required",
            ApiError::DatabaseFailure(_) => "Database error occurred",
            ApiError::UnexpectedFailure(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::DatabaseFailure(detail) => {
                tracing::error!("Database error: {}", detail);
            }
            ApiError::UnexpectedFailure(detail) => {
                tracing::error!("Unexpected error: {}", detail);
            }
            ApiError::InvalidPayload | ApiError::MissingField => {
                tracing::debug!("Rejected submission: {}", self);
            }
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// SQLx 에러를 ApiError로 변환
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::DatabaseFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingField.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::DatabaseFailure("refused".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UnexpectedFailure("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_not_public() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ApiError::DatabaseFailure(_)));
        assert_eq!(err.public_message(), "Database error occurred");

        let err = ApiError::UnexpectedFailure("secret stack detail".into());
        assert_eq!(err.public_message(), "Internal server error");
        assert!(!err.public_message().contains("secret"));
    }
}
