//! Error types for the customer API client.
//!
//! # Design
//! Transport failures and non-2xx responses are surfaced the same way to the
//! user: each error exposes an [`ErrorCode`] and a human-readable message,
//! which is exactly what the notification bus displays.

use std::fmt;

use thiserror::Error;

/// Short code shown as the title of an error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// HTTP status of a non-2xx response.
    Status(u16),
    Network,
    BadResponse,
    BadRequest,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Status(status) => write!(f, "{status}"),
            ErrorCode::Network => f.write_str("ERR_NETWORK"),
            ErrorCode::BadResponse => f.write_str("ERR_BAD_RESPONSE"),
            ErrorCode::BadRequest => f.write_str("ERR_BAD_REQUEST"),
        }
    }
}

/// Errors produced while talking to the customer API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response. Built by the host transport.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with an unexpected status.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn network(err: impl fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Network(_) => ErrorCode::Network,
            ApiError::Server { status, .. } => ErrorCode::Status(*status),
            ApiError::Decode(_) => ErrorCode::BadResponse,
            ApiError::Encode(_) => ErrorCode::BadRequest,
        }
    }

    /// Message suitable for display, without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg)
            | ApiError::Server { message: msg, .. }
            | ApiError::Decode(msg)
            | ApiError::Encode(msg) => msg,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }
}
