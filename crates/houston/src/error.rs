//! Error types for `houston`.
//!
//! Transport failures and GraphQL-level failures share one type. Callers
//! distinguish them by message, so the server's text is kept untouched.

use thiserror::Error;

/// Primary error type for Houston API calls.
#[derive(Error, Debug)]
pub enum HoustonError {
    // === GraphQL Errors ===
    /// The server answered with a GraphQL error list. The first message is
    /// authoritative and rendered verbatim.
    #[error("{message}")]
    Api {
        message: String,
        code: Option<String>,
    },

    /// The server returned no payload for the requested field.
    #[error("Houston returned no data for {field}")]
    MissingData { field: String },

    // === HTTP Errors ===
    /// Non-success HTTP status without a decodable GraphQL error list.
    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    /// Connection, TLS or timeout failure in the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // === Decoding Errors ===
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HoustonError {
    #[must_use]
    pub fn api(message: impl Into<String>, code: Option<String>) -> Self {
        Self::Api {
            message: message.into(),
            code,
        }
    }

    /// The raw message reported by the server, if this is a GraphQL error.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Machine-readable code from `extensions.code`, when present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Result type using `HoustonError`.
pub type Result<T> = std::result::Result<T, HoustonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = HoustonError::api(
            "A duplicate role binding already exists",
            Some("BAD_USER_INPUT".to_string()),
        );
        assert_eq!(err.to_string(), "A duplicate role binding already exists");
        assert_eq!(
            err.server_message(),
            Some("A duplicate role binding already exists")
        );
        assert_eq!(err.code(), Some("BAD_USER_INPUT"));
    }

    #[test]
    fn test_http_error_has_no_server_message() {
        let err = HoustonError::Http {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert!(err.server_message().is_none());
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");
    }
}
