use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// `{ success, data, message? }` wrapper used by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T, ServiceError> {
        if !self.success {
            return Err(ServiceError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was rejected".to_string()),
            ));
        }
        self.data.ok_or(ServiceError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Token {
        token: String,
    }

    #[test]
    fn test_success_yields_data() {
        let envelope: ApiEnvelope<Token> =
            serde_json::from_str(r#"{ "success": true, "data": { "token": "abc" } }"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Token { token: "abc".to_string() });
    }

    #[test]
    fn test_failure_carries_message() {
        let envelope: ApiEnvelope<Token> = serde_json::from_str(
            r#"{ "success": false, "message": "Invalid credentials" }"#,
        )
        .unwrap();
        match envelope.into_result() {
            Err(ServiceError::Rejected(message)) => assert_eq!(message, "Invalid credentials"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_null_data_is_missing() {
        let envelope: ApiEnvelope<Token> =
            serde_json::from_str(r#"{ "success": true, "data": null, "message": "ok" }"#).unwrap();
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert!(matches!(envelope.into_result(), Err(ServiceError::MissingData)));
    }

    #[test]
    fn test_success_without_data() {
        let envelope: ApiEnvelope<Token> = serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(matches!(envelope.into_result(), Err(ServiceError::MissingData)));
    }
}
