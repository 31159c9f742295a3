//! Error type shared by every accessor in [`crate::client`].

use serde_json::Value;

/// Result alias for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Uniform failure of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// Parsed JSON body, or the raw text as a JSON string.
        body: Value,
    },

    /// The body looked like JSON but could not be parsed, or did not have the
    /// shape the accessor needs.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and the response body.
    ///
    /// The message prefers the body's `detail` field, which is where the backend
    /// puts its human-readable reason.
    pub fn from_status(status: u16, body: Value) -> Self {
        let message = match describe_body(&body) {
            Some(detail) => format!("Request failed: {status} - {detail}"),
            None => format!("Request failed: {status}"),
        };
        Self::Status {
            status,
            message,
            body,
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Body of the failed response, if there was one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn describe_body(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail") {
        return Some(match detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    }
    match body {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_string_is_used_verbatim() {
        let err = ApiError::from_status(404, json!({"detail": "Not found"}));
        assert_eq!(err.to_string(), "Request failed: 404 - Not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(&json!({"detail": "Not found"})));
    }

    #[test]
    fn test_structured_detail_is_serialized() {
        let err = ApiError::from_status(
            422,
            json!({"detail": [{"loc": ["body", "email"], "msg": "field required"}]}),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Request failed: 422 - "));
        assert!(msg.contains("field required"));
    }

    #[test]
    fn test_text_body_without_detail() {
        let err = ApiError::from_status(500, Value::String("Internal Server Error\n".into()));
        assert_eq!(err.to_string(), "Request failed: 500 - Internal Server Error");
    }

    #[test]
    fn test_empty_body() {
        let err = ApiError::from_status(503, Value::String(String::new()));
        assert_eq!(err.to_string(), "Request failed: 503");
    }
}
