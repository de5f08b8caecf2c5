//! Transport error types

use thiserror::Error;

/// Failure to obtain a JSON body from the service
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    /// HTTP status, when the service answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Decode, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Unknown, message)
    }

    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, body: &str) -> Self {
        let (kind, message) = match status {
            401 | 403 => (
                TransportErrorKind::Auth,
                format!("Authentication failed: {body}"),
            ),
            429 => (
                TransportErrorKind::RateLimit,
                format!("Rate limited: {body}"),
            ),
            400..=499 => (
                TransportErrorKind::InvalidRequest,
                format!("Invalid request ({status}): {body}"),
            ),
            500..=599 => (
                TransportErrorKind::ServerError,
                format!("Server error ({status}): {body}"),
            ),
            _ => (TransportErrorKind::Unknown, format!("HTTP {status}: {body}")),
        };
        Self {
            kind,
            status: Some(status),
            message,
        }
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection failures and timeouts
    Network,
    /// Bad or missing subscription key (401, 403)
    Auth,
    /// Quota exceeded (429)
    RateLimit,
    /// Other 4xx
    InvalidRequest,
    /// 5xx
    ServerError,
    /// Body was not JSON
    Decode,
    Unknown,
}
