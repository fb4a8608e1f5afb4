//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SdkError {
    /// The HTTP-layer error, if this is one.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            SdkError::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
///
/// `RequestFailed` displays only the operation message ("Subscription failed",
/// "Failed to load posts", ...). The structured cause is kept alongside it.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("{message}")]
    RequestFailed {
        message: &'static str,
        #[source]
        cause: FailureCause,
    },

    #[error("{message}: malformed response body")]
    DecodeFailed {
        message: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Why a request did not produce a usable reply.
#[derive(Error, Debug)]
pub enum FailureCause {
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    #[cfg(feature = "http")]
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl HttpError {
    /// The operation-specific message, if the error belongs to an operation.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            HttpError::RequestFailed { message, .. } | HttpError::DecodeFailed { message, .. } => {
                Some(*message)
            }
            #[cfg(feature = "http")]
            HttpError::Client(_) => None,
        }
    }

    /// HTTP status code of a non-success reply.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::RequestFailed {
                cause: FailureCause::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller could reasonably try the same request again.
    ///
    /// The SDK never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            HttpError::RequestFailed { cause, .. } => match cause {
                FailureCause::Status { status, .. } => {
                    matches!(*status, 408 | 429 | 500..=599)
                }
                #[cfg(feature = "http")]
                FailureCause::Transport(_) => true,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_failure(message: &'static str, status: u16) -> HttpError {
        HttpError::RequestFailed {
            message,
            cause: FailureCause::Status {
                status,
                body: String::new(),
            },
        }
    }

    #[test]
    fn test_request_failed_displays_operation_message() {
        let err = status_failure("Subscription failed", 500);
        assert_eq!(err.to_string(), "Subscription failed");
        assert_eq!(err.message(), Some("Subscription failed"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_sdk_error_wraps_http_error() {
        let err: SdkError = status_failure("Lead submission failed", 400).into();
        assert_eq!(err.to_string(), "HTTP error: Lead submission failed");
        assert_eq!(err.as_http().and_then(HttpError::status), Some(400));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(status_failure("x", 500).is_retryable());
        assert!(status_failure("x", 503).is_retryable());
        assert!(status_failure("x", 429).is_retryable());
        assert!(status_failure("x", 408).is_retryable());
        assert!(!status_failure("x", 400).is_retryable());
        assert!(!status_failure("x", 404).is_retryable());
    }

    #[test]
    fn test_decode_failed_is_not_retryable() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = HttpError::DecodeFailed {
            message: "Failed to load posts",
            source,
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), Some("Failed to load posts"));
        assert!(err.to_string().starts_with("Failed to load posts"));
    }
}
