//! Error type shared by every backend operation.

use thiserror::Error;

/// Failure of a call against the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No session token is held, so there is no current user to ask for.
    #[error("not signed in")]
    NoSession,

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an HTTP error from a status and the raw response body.
    ///
    /// The backend reports failures as `{"message": "..."}` or, for
    /// validation failures, `{"message": ["...", "..."]}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("message")? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(items) => {
                    let parts: Vec<&str> = items.iter().filter_map(|i| i.as_str()).collect();
                    (!parts.is_empty()).then(|| parts.join(", "))
                }
                _ => None,
            })
            .filter(|m| !m.trim().is_empty());

        Self::Http { status, message }
    }

    /// Text suitable for showing to the user, if the failure carries any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
