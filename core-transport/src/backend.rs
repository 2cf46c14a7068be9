//! HTTP backend abstraction.
//!
//! The [`Transport`](crate::Transport) speaks to the wire through this trait
//! so adapters are testable without a network. Implementations perform one
//! exchange and report pre-response failures with enough shape for the
//! transport to classify them; they do not retry and do not interpret
//! response bodies.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// HTTP method types recognized by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// A single wire request, fully resolved by the transport.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
    pub timeout: Duration,
}

impl BackendRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }
}

/// A received response, body fully buffered.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl BackendResponse {
    /// Response body as UTF-8 text, lossy.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Failure modes a backend can report before a response exists.
///
/// The distinction matters to classification: `Timeout` becomes the
/// transport's TIMEOUT code, everything else NETWORK_ERROR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// Async HTTP backend trait.
///
/// One call, one exchange. Implementations must honor `request.timeout` as
/// an upper bound where the underlying client supports it; the transport
/// additionally enforces the deadline around the whole call.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: BackendRequest) -> Result<BackendResponse, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = BackendRequest::new(
            HttpMethod::Get,
            "https://api.example.com/v1/tasks/feed",
            Duration::from_secs(10),
        )
        .header("Accept", "application/json")
        .body(Bytes::from_static(b"{}"));

        assert_eq!(request.url, "https://api.example.com/v1/tasks/feed");
        assert_eq!(
            request.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
        assert_eq!(request.body, Some(Bytes::from_static(b"{}")));
    }

    #[test]
    fn test_response_text_is_lossy() {
        let response = BackendResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(vec![0xff, 0xfe]),
        };
        // Invalid UTF-8 must not panic.
        assert!(!response.text().is_empty());
    }
}
