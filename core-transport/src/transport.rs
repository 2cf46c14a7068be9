//! Request lifecycle: header merging, body serialization, deadline
//! enforcement, status classification, and body parsing.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::backend::{BackendError, BackendRequest, HttpBackend, HttpMethod};
use crate::classify::classify_status;
use crate::error::{TransportError, TransportResult};

/// Default per-request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Per-request options.
///
/// `headers` are merged on top of the JSON defaults, so a caller that
/// explicitly sets `Content-Type` wins; one that does not gets
/// `application/json`.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
    pub timeout_ms: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            headers: HashMap::new(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RequestConfig {
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Faults a test harness can inject ahead of the backend.
///
/// Production code constructs the transport without one; there is no
/// module-level switch to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFault {
    /// Resolve as if the deadline fired.
    Timeout,
    /// Resolve as if the connection never succeeded.
    Network,
    /// Resolve as if the backend answered with this status.
    Status(u16),
}

/// The HTTP request layer.
///
/// Every call resolves to a [`TransportResult`]; this type never panics and
/// never leaks a pending timer - the deadline future is dropped on every
/// exit path. No retries, no caching, no logging.
#[derive(Clone)]
pub struct Transport {
    backend: Arc<dyn HttpBackend>,
    fault: Option<InjectedFault>,
}

impl Transport {
    pub fn new(backend: Arc<dyn HttpBackend>) -> Self {
        Self {
            backend,
            fault: None,
        }
    }

    /// Test-harness constructor: every request short-circuits into `fault`
    /// before the backend is consulted.
    pub fn with_fault(backend: Arc<dyn HttpBackend>, fault: InjectedFault) -> Self {
        Self {
            backend,
            fault: Some(fault),
        }
    }

    /// Issue one request and parse the 2xx body as JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> TransportResult<T> {
        let timeout_ms = config.timeout_ms;

        if let Some(fault) = self.fault {
            return Err(match fault {
                InjectedFault::Timeout => TransportError::timeout(timeout_ms),
                InjectedFault::Network => TransportError::network("injected network fault"),
                InjectedFault::Status(status) => classify_status(status),
            });
        }

        let body = match &config.body {
            Some(value) => match serde_json::to_vec(value) {
                Ok(bytes) => Some(Bytes::from(bytes)),
                Err(e) => {
                    return Err(TransportError::network(format!(
                        "Failed to serialize request body: {}",
                        e
                    )))
                }
            },
            None => None,
        };

        let mut headers = HashMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        headers.extend(config.headers);

        let mut request = BackendRequest::new(
            config.method,
            url,
            Duration::from_millis(timeout_ms),
        );
        request.headers = headers;
        request.body = body;

        // The deadline wraps the whole exchange; when it fires the backend
        // future is dropped, which aborts the in-flight request. Every
        // other exit path drops the timer with it.
        let settled = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.backend.execute(request),
        )
        .await;

        let response = match settled {
            Err(_elapsed) => return Err(TransportError::timeout(timeout_ms)),
            Ok(Err(BackendError::Timeout)) => return Err(TransportError::timeout(timeout_ms)),
            Ok(Err(BackendError::Connect(message))) => return Err(TransportError::network(message)),
            Ok(Err(BackendError::Other(message))) => return Err(TransportError::network(message)),
            Ok(Ok(response)) => response,
        };

        if !(200..300).contains(&response.status) {
            return Err(classify_status(response.status).with_body(response.text()));
        }

        match serde_json::from_slice::<T>(&response.body) {
            Ok(data) => Ok(data),
            Err(e) => Err(TransportError::invalid_json(response.status, &e)),
        }
    }

    /// Convenience wrapper fixing the method to GET.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        mut config: RequestConfig,
    ) -> TransportResult<T> {
        config.method = HttpMethod::Get;
        config.body = None;
        self.request(url, config).await
    }

    /// Convenience wrapper fixing the method to POST.
    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Value,
        mut config: RequestConfig,
    ) -> TransportResult<T> {
        config.method = HttpMethod::Post;
        config.body = Some(body);
        self.request(url, config).await
    }
}
