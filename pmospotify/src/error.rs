//! Error types for the Spotify client

use reqwest::StatusCode;
use serde::Deserialize;

/// Result type alias for Spotify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the Spotify client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The Web API answered with a non-2xx status
    ///
    /// `status` and `message` come from the `{"error": {...}}` envelope when
    /// the body carries one, otherwise from the HTTP response itself.
    #[error("Spotify API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human readable message
        message: String,
    },

    /// Arguments rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The endpoint answered without a body where one was expected
    #[error("No content returned")]
    NoContent,

    /// The page has no `next` (or `previous`) link
    #[error("No more pages")]
    NoMorePages,

    /// The client's cancellation token fired
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration error (from pmoconfig/anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an input validation error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build an API error from a status code and the raw response body
    ///
    /// Understands both the regular envelope
    /// (`{"error": {"status": 404, "message": "..."}}`) and the
    /// authentication one (`{"error": "invalid_client", "error_description": "..."}`).
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let fallback = || {
            let text = body.trim();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text.to_string()
            }
        };

        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope::Regular { error }) => Self::Api {
                status: error.status.unwrap_or(status.as_u16()),
                message: error.message.unwrap_or_else(fallback),
            },
            Ok(ErrorEnvelope::Auth {
                error,
                error_description,
            }) => Self::Api {
                status: status.as_u16(),
                message: error_description.unwrap_or(error),
            },
            Err(_) => Self::Api {
                status: status.as_u16(),
                message: fallback(),
            },
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the request was aborted through the cancellation token
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the API reported a missing resource (404)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if the access token was rejected (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorEnvelope {
    Regular {
        error: ErrorBody,
    },
    Auth {
        error: String,
        #[serde(default)]
        error_description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_envelope() {
        let err = Error::from_status(
            StatusCode::NOT_FOUND,
            r#"{ "error": { "status": 404, "message": "non existing id" } }"#,
        );
        match err {
            Error::Api { status, ref message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "non existing id");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_not_found());
    }

    #[test]
    fn test_auth_envelope() {
        let err = Error::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_client","error_description":"Invalid client secret"}"#,
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "Spotify API error (400): Invalid client secret"
        );
    }

    #[test]
    fn test_missing_envelope_uses_body() {
        let err = Error::from_status(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("upstream exploded"));
    }

    #[test]
    fn test_empty_body_uses_reason() {
        let err = Error::from_status(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_envelope_without_status() {
        let err = Error::from_status(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"message": "API rate limit exceeded"}}"#,
        );
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_cancelled() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::NoContent.is_cancelled());
        assert_eq!(Error::Cancelled.status(), None);
    }
}
