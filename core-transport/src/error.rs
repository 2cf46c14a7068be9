use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed set of transport-level failure kinds.
///
/// These describe what went wrong in the wire exchange itself; the
/// observability layer maps them onto product-level codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportErrorCode {
    /// DNS failure, refused connection, offline device - no response seen
    NetworkError,
    /// The per-request deadline fired before the request settled
    Timeout,
    /// Non-2xx response that is not one of the specific statuses below
    ServerError,
    /// 2xx response whose body failed to parse as JSON
    InvalidJson,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
}

impl TransportErrorCode {
    /// Stable wire name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::ServerError => "SERVER_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

/// A transport failure as a value.
///
/// Invariants: [`TransportErrorCode::Timeout`] and
/// [`TransportErrorCode::NetworkError`] never carry a `status_code`; the
/// status-derived codes always do. `body` keeps the raw response text for
/// diagnostics only - it is never parsed into the success channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub code: TransportErrorCode,
    pub message: String,
    pub status_code: Option<u16>,
    pub body: Option<String>,
}

impl TransportError {
    /// Failure before any response was received.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            code: TransportErrorCode::NetworkError,
            message: message.into(),
            status_code: None,
            body: None,
        }
    }

    /// The deadline fired before the request settled.
    pub fn timeout(timeout_ms: u64) -> Self {
        Self {
            code: TransportErrorCode::Timeout,
            message: format!("Request timed out after {}ms", timeout_ms),
            status_code: None,
            body: None,
        }
    }

    /// A 2xx response whose body was not valid JSON.
    pub fn invalid_json(status: u16, source: &serde_json::Error) -> Self {
        Self {
            code: TransportErrorCode::InvalidJson,
            message: format!("Response body was not valid JSON: {}", source),
            status_code: Some(status),
            body: None,
        }
    }

    /// Status-derived error; used by the classifier.
    pub(crate) fn from_status(
        code: TransportErrorCode,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            status_code: Some(status),
            body: None,
        }
    }

    /// Attach the raw response text for diagnostics.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Result type every transport operation resolves to.
///
/// Exactly one variant is populated; callers branch before touching the
/// payload. The transport never panics and never returns through any other
/// channel.
pub type TransportResult<T> = std::result::Result<T, TransportError>;
