//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when talking to the MMS / Ops Manager API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    /// HTTP request failed.
    #[error("Failed to make HTTP request. Error: {0}")]
    Http(String),

    /// Connection failed.
    #[error("Failed to make HTTP request. Error: connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Failed to make HTTP request. Error: {0}")]
    Timeout(String),

    /// The response body could not be read.
    #[error("Failed to read HTTP response body. Error: {0}")]
    Body(String),

    /// Non-success status with a JSON error document.
    #[error("API Error: {reason} ({detail})")]
    Api { reason: String, detail: String },

    /// Non-success status whose body was not JSON.
    #[error("API response did not contain valid JSON. Body: {0}")]
    InvalidErrorBody(String),

    /// Success status but the body did not match the expected shape.
    #[error("Response did not contain valid JSON. Error: {message}, Body: {body}")]
    Parse { message: String, body: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

impl ClientError {
    /// Build the error for a non-success response from its raw body.
    ///
    /// The API answers errors with `{"reason": ..., "detail": ...}`; missing
    /// fields render empty, a non-JSON body is kept verbatim.
    pub fn from_error_body(body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => ClientError::Api {
                reason: json_field(&value, "reason"),
                detail: json_field(&value, "detail"),
            },
            Err(_) => ClientError::InvalidErrorBody(body.to_string()),
        }
    }
}

fn json_field(value: &serde_json::Value, key: &str) -> String {
    match value.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_reason_and_detail() {
        let err = ClientError::from_error_body(
            r#"{"detail":"No host with hostname db9 exists in group 42.","error":404,"errorCode":"HOST_NOT_FOUND","reason":"Not Found"}"#,
        );
        assert_eq!(
            err.to_string(),
            "API Error: Not Found (No host with hostname db9 exists in group 42.)"
        );
    }

    #[test]
    fn test_error_body_missing_fields() {
        let err = ClientError::from_error_body(r#"{"error":401}"#);
        assert_eq!(err.to_string(), "API Error:  ()");
    }

    #[test]
    fn test_transport_messages() {
        let err = ClientError::Timeout("operation timed out".to_string());
        assert_eq!(err.to_string(), "Failed to make HTTP request. Error: operation timed out");

        let err = ClientError::Body("connection reset".to_string());
        assert_eq!(err.to_string(), "Failed to read HTTP response body. Error: connection reset");
    }

    #[test]
    fn test_error_body_not_json() {
        let err = ClientError::from_error_body("<html>Bad Gateway</html>");
        assert_eq!(
            err.to_string(),
            "API response did not contain valid JSON. Body: <html>Bad Gateway</html>"
        );
    }
}
