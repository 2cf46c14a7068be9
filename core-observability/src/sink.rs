//! Event sink and the [`Logger`] façade.
//!
//! The sink contract is strict: `log` is synchronous, infallible, never
//! suspends, and never touches the network.

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use crate::codes::ErrorCode;
use crate::event::{LogEvent, LogLevel, LogScope};
use crate::policy::error_config;

/// Receives structured events. Side-effect only.
pub trait LogSink: Send + Sync {
    fn log(&self, event: LogEvent);
}

/// Development sink: mirrors events into `tracing` at the mapped level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, event: LogEvent) {
        let code = event.code.map(ErrorCode::as_str);
        let meta = event.meta.as_ref().map(|m| m.to_string());
        let meta = meta.as_deref();
        match event.level {
            LogLevel::Info => tracing::info!(
                scope = event.scope.as_str(),
                code,
                adapter = event.adapter.as_deref(),
                screen = event.screen.as_deref(),
                meta,
                "{}",
                event.message
            ),
            LogLevel::Warn => tracing::warn!(
                scope = event.scope.as_str(),
                code,
                adapter = event.adapter.as_deref(),
                screen = event.screen.as_deref(),
                meta,
                "{}",
                event.message
            ),
            LogLevel::Error => tracing::error!(
                scope = event.scope.as_str(),
                code,
                adapter = event.adapter.as_deref(),
                screen = event.screen.as_deref(),
                recoverable = event.recoverable,
                action = event.action.as_deref(),
                meta,
                "{}",
                event.message
            ),
        }
    }
}

/// Production default: drops everything. An external crash/metrics
/// forwarder would replace this at host wiring time.
#[derive(Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _event: LogEvent) {}
}

/// Optional context on an error event.
#[derive(Debug, Clone, Default)]
pub struct ErrorEventDetails {
    pub screen: Option<String>,
    pub adapter: Option<String>,
    pub recoverable: Option<bool>,
    pub action: Option<String>,
    pub meta: Option<Value>,
}

impl ErrorEventDetails {
    pub fn meta(meta: Value) -> Self {
        Self {
            meta: Some(meta),
            ..Self::default()
        }
    }
}

/// Cheap-to-clone handle over the process sink.
///
/// Convenience constructors stamp the timestamp at call time. `error`
/// derives `recoverable`/`action` from the policy table when the caller
/// does not supply them.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Logger that drops everything.
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopSink))
    }

    pub fn info(&self, scope: LogScope, message: impl Into<String>, meta: Option<Value>) {
        self.sink.log(LogEvent {
            level: LogLevel::Info,
            scope,
            code: None,
            message: message.into(),
            screen: None,
            adapter: None,
            recoverable: None,
            action: None,
            meta,
            timestamp: Utc::now(),
        });
    }

    pub fn error(
        &self,
        scope: LogScope,
        code: ErrorCode,
        message: impl Into<String>,
        details: ErrorEventDetails,
    ) {
        let config = error_config(code);
        self.sink.log(LogEvent {
            level: LogLevel::Error,
            scope,
            code: Some(code),
            message: message.into(),
            screen: details.screen,
            adapter: details.adapter,
            recoverable: details.recoverable.or(Some(config.recoverable)),
            action: details
                .action
                .or_else(|| Some(config.action.label().to_string())),
            meta: details.meta,
            timestamp: Utc::now(),
        });
    }
}
