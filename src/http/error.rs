//! Classification of request failures.

use reqwest::StatusCode;

/// Failures surfaced to callers of the configured client.
///
/// Every request resolves with either a response value or one of these;
/// the client performs no recovery on its own.
#[derive(Debug)]
pub enum ApiError {
    /// No complete response within the configured timeout
    Timeout(String),
    /// Connection-level failure (refused, DNS, TLS)
    Transport(String),
    /// A response arrived with a non-success status code
    Status(StatusCode, String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Timeout(msg) => {
                write!(f, "Request timed out: {}", msg)
            }
            ApiError::Transport(msg) => {
                write!(f, "Connection failed: {}. Is the NoteHub API reachable?", msg)
            }
            ApiError::Status(status, msg) => match *status {
                StatusCode::NOT_FOUND => write!(f, "Not found: {}", msg),
                StatusCode::UNAUTHORIZED => {
                    write!(f, "Authentication required: {}", msg)
                }
                StatusCode::FORBIDDEN => write!(f, "Access forbidden: {}", msg),
                s if s.is_server_error() => {
                    write!(f, "Server error (HTTP {}): {}", s.as_u16(), msg)
                }
                s => write!(f, "Request failed (HTTP {}): {}", s.as_u16(), msg),
            },
        }
    }
}

impl std::error::Error for ApiError {}

/// Maps a reqwest error onto [`ApiError`].
///
/// Timeouts are checked first: a timeout while reading the body would
/// otherwise be misreported as a decode failure. Decode errors are not part
/// of the taxonomy and pass through with context instead.
pub fn check_failure(error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow::Error::from(ApiError::Timeout(error.to_string()));
    }

    if let Some(status) = error.status() {
        return anyhow::Error::from(ApiError::Status(status, error.to_string()));
    }

    if error.is_decode() {
        return anyhow::Error::from(error).context("Failed to parse JSON response");
    }

    // Everything else happens before a response exists: connect, DNS,
    // request building, redirect loops.
    anyhow::Error::from(ApiError::Transport(error.to_string()))
}
