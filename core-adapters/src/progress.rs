//! Task progress screen shape.

use serde::Serialize;
use serde_json::Value;

use crate::guard::{self, GuardError};
use crate::outcome::AdapterOutcome;

/// Where the runner is in the task lifecycle.
///
/// Anything outside this set is an error outcome, never a silent default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressState {
    #[default]
    EnRoute,
    Working,
}

impl ProgressState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnRoute => "EN_ROUTE",
            Self::Working => "WORKING",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "EN_ROUTE" => Some(Self::EnRoute),
            "WORKING" => Some(Self::Working),
            _ => None,
        }
    }
}

/// Props for the task progress screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgressProps {
    pub task_id: String,
    pub state: ProgressState,
    pub destination_address: String,
    pub destination_lat: Option<f64>,
    pub destination_lng: Option<f64>,
    pub eta_minutes: i64,
    pub contact_name: String,
}

impl TaskProgressProps {
    /// Fixed stub returned on every error outcome.
    pub fn stub() -> Self {
        Self {
            task_id: String::new(),
            state: ProgressState::default(),
            destination_address: String::new(),
            destination_lat: None,
            destination_lng: None,
            eta_minutes: 0,
            contact_name: String::new(),
        }
    }
}

/// Guard chain: `task.id` non-empty, `destination.address` string, `state`
/// drawn from the progress enum.
pub(crate) fn from_payload(
    payload: &Value,
) -> Result<AdapterOutcome<TaskProgressProps>, GuardError> {
    let task_id = guard::require_non_empty_str(payload, "task.id")?.to_string();
    let destination_address = guard::require_str(payload, "destination.address")?.to_string();
    let state = ProgressState::parse(guard::require_str(payload, "state")?)
        .ok_or_else(|| GuardError::new("state", "has an unexpected value"))?;

    Ok(AdapterOutcome::success(TaskProgressProps {
        task_id,
        state,
        destination_address,
        destination_lat: guard::opt_number(payload, "destination.lat"),
        destination_lng: guard::opt_number(payload, "destination.lng"),
        eta_minutes: guard::int_or(payload, "etaMinutes", 0),
        contact_name: guard::string_or(payload, "poster.contactName", ""),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::AdapterState;
    use serde_json::json;

    #[test]
    fn test_success_en_route() {
        let payload = json!({
            "task": {"id": "t-3"},
            "destination": {"address": "12 Elm St", "lat": 40.1, "lng": -74.2},
            "state": "EN_ROUTE",
            "etaMinutes": 12
        });

        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.state, AdapterState::Success);
        assert_eq!(outcome.props.state, ProgressState::EnRoute);
        assert_eq!(outcome.props.destination_address, "12 Elm St");
        assert_eq!(outcome.props.destination_lat, Some(40.1));
        assert_eq!(outcome.props.eta_minutes, 12);
    }

    #[test]
    fn test_working_state() {
        let payload = json!({
            "task": {"id": "t-3"},
            "destination": {"address": "12 Elm St"},
            "state": "WORKING"
        });
        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.props.state, ProgressState::Working);
    }

    #[test]
    fn test_unknown_state_is_an_error() {
        let payload = json!({
            "task": {"id": "t-3"},
            "destination": {"address": "12 Elm St"},
            "state": "DELIVERING"
        });
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "state");
        assert_eq!(err.problem, "has an unexpected value");
    }

    #[test]
    fn test_missing_state_is_an_error() {
        let payload = json!({
            "task": {"id": "t-3"},
            "destination": {"address": "12 Elm St"}
        });
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "state");
    }

    #[test]
    fn test_missing_address_fails_before_state() {
        let payload = json!({"task": {"id": "t-3"}, "state": "BOGUS"});
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "destination.address");
    }

    #[test]
    fn test_state_serializes_screaming() {
        let json = serde_json::to_string(&ProgressState::EnRoute).unwrap();
        assert_eq!(json, "\"EN_ROUTE\"");
    }
}
