//! The single failure channel for a dispatch attempt.
//!
//! # Design
//! Header-parse errors, non-2xx statuses, transport failures, and body-decode
//! failures all collapse into one enum with no distinct recovery paths; every
//! variant is terminal for that attempt and its `Display` text is what the
//! user sees. `HttpStatus` renders the exact `HTTP error! status: <code>`
//! message; `Transport` passes the underlying failure's message through
//! verbatim.

use std::fmt;

/// Why a dispatch attempt produced no table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The header text was non-empty but not a JSON object of strings.
    /// Raised before any network call.
    InvalidHeaders(String),

    /// The server answered with a status outside 200-299.
    HttpStatus(u16),

    /// The request never completed: DNS, connection refused, and similar.
    Transport(String),

    /// The response arrived but its body was not valid JSON.
    Decode(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::InvalidHeaders(msg) => {
                write!(f, "invalid header JSON: {msg}")
            }
            DispatchError::HttpStatus(status) => {
                write!(f, "HTTP error! status: {status}")
            }
            DispatchError::Transport(msg) => write!(f, "{msg}"),
            DispatchError::Decode(msg) => {
                write!(f, "response body is not valid JSON: {msg}")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_is_exact() {
        let err = DispatchError::HttpStatus(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn transport_message_passes_through_verbatim() {
        let err = DispatchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
