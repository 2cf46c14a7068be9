//! Structured log events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::codes::ErrorCode;

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which part of the client emitted the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogScope {
    Adapter,
    Screen,
    Navigation,
    System,
    Network,
}

impl LogScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adapter => "adapter",
            Self::Screen => "screen",
            Self::Navigation => "navigation",
            Self::System => "system",
            Self::Network => "network",
        }
    }
}

/// One structured observability event.
///
/// Append-only and fire-and-forget: events have no identity and no
/// ownership beyond the call that creates them. No PII crosses this
/// boundary, only transition and error metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub level: LogLevel,
    pub scope: LogScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recoverable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_omits_absent_fields() {
        let event = LogEvent {
            level: LogLevel::Info,
            scope: LogScope::System,
            code: None,
            message: "core initialized".to_string(),
            screen: None,
            adapter: None,
            recoverable: None,
            action: None,
            meta: None,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["scope"], "system");
        assert!(json.get("code").is_none());
        assert!(json.get("recoverable").is_none());
    }

    #[test]
    fn test_error_event_serializes_code_and_meta() {
        let event = LogEvent {
            level: LogLevel::Error,
            scope: LogScope::Network,
            code: Some(ErrorCode::NotFound),
            message: "Resource not found".to_string(),
            screen: None,
            adapter: Some("task_detail".to_string()),
            recoverable: Some(false),
            action: Some("back".to_string()),
            meta: Some(serde_json::json!({"statusCode": 404})),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["meta"]["statusCode"], 404);
        assert_eq!(json["adapter"], "task_detail");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
