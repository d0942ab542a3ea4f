use serde::Deserialize;

/// Failures talking to the Doppio backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Backend answered with a non-success status.
    #[error("API Error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Backend request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid backend response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Error body returned by the backend on failure. Every field is best-effort.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = BackendError::Status {
            status: 404,
            message: "Coffee not found".into(),
        };
        assert_eq!(err.to_string(), "API Error: 404 - Coffee not found");
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
        assert!(body.error.is_none());
    }
}
