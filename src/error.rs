//! Error types
//!
//! Every inspection failure collapses to one human-readable message; the
//! `Display` output of [`InspectError`] is exactly what the result panel shows.

use thiserror::Error;

/// Failure of a request against the inspection API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// Request never produced a response (DNS, TLS, CORS, connection reset)
    #[error("{0}")]
    Network(String),

    /// Non-2xx response; `message` was extracted from the error body
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body was not JSON
    #[error("{0}")]
    Decode(String),
}

/// Failure while bootstrapping the application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = InspectError::Status {
            status: 422,
            message: "bad perspective".to_string(),
        };
        assert_eq!(err.to_string(), "bad perspective");
        assert_eq!(
            InspectError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }
}
