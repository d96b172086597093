//! # Common Error Types
//!
//! Consolidated error handling for the dashboard application.
//!
//! Two layers:
//!
//! - [`FetchError`]: everything that can go wrong talking to the remote
//!   market API (network, timeout, HTTP status, body parsing). The client
//!   never retries; a failed call surfaces immediately and the caller
//!   decides what to do with the previous data.
//! - [`AppError`]: application-wide error covering fetch failures plus
//!   state and input-validation problems.

use thiserror::Error;

/// Failure of a single remote fetch.
///
/// All four variants collapse to the same recovery path: keep the
/// previously displayed data (or show the first-load error affordance) and
/// wait for the next tick or a manual retry.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Connection-level failure (DNS, refused, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The bounded request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Classify a transport error from reqwest.
    pub fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `thiserror` provides the
/// `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote market API failure.
    #[error("API error: {0}")]
    Api(#[from] FetchError),

    /// Application state management failure (invalid transition, lock
    /// poisoning would land here too).
    #[error("State error: {0}")]
    State(String),

    /// Input validation failure (unsupported page size, malformed query).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(FetchError::Status(429).to_string(), "unexpected status: 429");
    }

    #[test]
    fn app_error_wraps_fetch_error() {
        let err: AppError = FetchError::Status(500).into();
        assert_eq!(err.to_string(), "API error: unexpected status: 500");
    }
}
