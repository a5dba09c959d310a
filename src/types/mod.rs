//! Common Types Module
//!
//! 대출 신청 도메인 타입 정의

use std::fmt;

use serde_json::{Map, Value};

use crate::error::ApiError;

/// 검증이 끝난 대출 신청서
///
/// 다섯 필드 모두 trim 후 비어있지 않음이 보장된다.
/// 생성 경로는 `from_json_slice` / `TryFrom<Value>` 뿐이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplication {
    name: String,
    contact: String,
    uid: String,
    loan_type: String,
    employment: String,
}

impl LoanApplication {
    /// 요청 본문(raw bytes)을 파싱하고 검증
    ///
    /// Content-Type 헤더와 무관하게 JSON으로 파싱한다.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidPayload)?;
        Self::try_from(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn loan_type(&self) -> &str {
        &self.loan_type
    }

    pub fn employment(&self) -> &str {
        &self.employment
    }
}

impl TryFrom<Value> for LoanApplication {
    type Error = ApiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if is_empty_payload(&value) {
            return Err(ApiError::InvalidPayload);
        }

        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ApiError::UnexpectedFailure(format!(
                    "payload must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let application = LoanApplication {
            name: text_field(&map, "name")?,
            contact: text_field(&map, "contact")?,
            uid: text_field(&map, "uid")?,
            loan_type: text_field(&map, "loanType")?,
            employment: text_field(&map, "employment")?,
        };

        let all_present = [
            &application.name,
            &application.contact,
            &application.uid,
            &application.loan_type,
            &application.employment,
        ]
        .iter()
        .all(|field| !field.is_empty());

        if !all_present {
            return Err(ApiError::MissingField);
        }

        Ok(application)
    }
}

impl fmt::Display for LoanApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, contact={}, uid={}, loan_type={}, employment={}",
            self.name, self.contact, self.uid, self.loan_type, self.employment
        )
    }
}

// ============ Helpers ============

/// null, false, 0, "", [], {} 는 빈 payload로 취급
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// 키가 없으면 빈 문자열, 문자열이면 trim, 그 외 타입은 예기치 않은 에러
fn text_field(map: &Map<String, Value>, key: &str) -> Result<String, ApiError> {
    match map.get(key) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(other) => Err(ApiError::UnexpectedFailure(format!(
            "field `{key}` must be a string, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "Jane Doe",
            "contact": "555-1234",
            "uid": "UID001",
            "loanType": "personal",
            "employment": "employed"
        })
    }

    #[test]
    fn test_valid_application() {
        let app = LoanApplication::try_from(valid_payload()).unwrap();
        assert_eq!(app.name(), "Jane Doe");
        assert_eq!(app.contact(), "555-1234");
        assert_eq!(app.uid(), "UID001");
        assert_eq!(app.loan_type(), "personal");
        assert_eq!(app.employment(), "employed");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let app = LoanApplication::try_from(json!({
            "name": "  Jane Doe  ",
            "contact": "\t555-1234\n",
            "uid": " UID001",
            "loanType": "personal ",
            "employment": "  employed"
        }))
        .unwrap();
        assert_eq!(app.name(), "Jane Doe");
        assert_eq!(app.contact(), "555-1234");
        assert_eq!(app.uid(), "UID001");
        assert_eq!(app.loan_type(), "personal");
        assert_eq!(app.employment(), "employed");
    }

    #[test]
    fn test_missing_key_is_missing_field() {
        for key in ["name", "contact", "uid", "loanType", "employment"] {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(key);
            let err = LoanApplication::try_from(payload).unwrap_err();
            assert!(matches!(err, ApiError::MissingField), "key {key}");
        }
    }

    #[test]
    fn test_whitespace_only_is_missing_field() {
        let mut payload = valid_payload();
        payload["uid"] = json!("   ");
        let err = LoanApplication::try_from(payload).unwrap_err();
        assert!(matches!(err, ApiError::MissingField));
    }

    #[test]
    fn test_empty_payloads_are_invalid() {
        let bodies: [&[u8]; 9] = [
            b"",
            b"null",
            b"{}",
            b"[]",
            b"\"\"",
            b"0",
            b"false",
            b"not json",
            b"{\"name\":",
        ];
        for body in bodies {
            let err = LoanApplication::from_json_slice(body).unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidPayload),
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_non_object_payload_is_unexpected() {
        let bodies: [&[u8]; 4] = [b"[1]", b"\"text\"", b"42", b"true"];
        for body in bodies {
            let err = LoanApplication::from_json_slice(body).unwrap_err();
            assert!(matches!(err, ApiError::UnexpectedFailure(_)));
        }
    }

    #[test]
    fn test_non_string_field_is_unexpected() {
        let mut payload = valid_payload();
        payload["contact"] = json!(5551234);
        let err = LoanApplication::try_from(payload).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedFailure(_)));

        let mut payload = valid_payload();
        payload["name"] = Value::Null;
        let err = LoanApplication::try_from(payload).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedFailure(_)));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut payload = valid_payload();
        payload["amount"] = json!(10_000);
        assert!(LoanApplication::try_from(payload).is_ok());
    }

    #[test]
    fn test_display_lists_fields() {
        let app = LoanApplication::try_from(valid_payload()).unwrap();
        assert_eq!(
            app.to_string(),
            "name=Jane Doe, contact=555-1234, uid=UID001, loan_type=personal, employment=employed"
        );
    }
}
