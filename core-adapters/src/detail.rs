//! Task detail screen shape.

use serde::Serialize;
use serde_json::Value;

use crate::guard::{self, GuardError};
use crate::outcome::AdapterOutcome;

/// Eligibility status the backend reports while it decides whether this
/// user may take the task.
const ELIGIBILITY_CHECKING: &str = "checking";
/// Sentinel that turns the detail screen into its blocked state.
const ELIGIBILITY_INELIGIBLE: &str = "ineligible";

/// Props for the task detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailProps {
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub reward_cents: i64,
    pub xp_reward: i64,
    pub poster_name: String,
    pub poster_rating: f64,
    pub eligibility_status: String,
    pub eligibility_reason: Option<String>,
}

impl TaskDetailProps {
    /// Fixed stub returned on every error outcome.
    pub fn stub() -> Self {
        Self {
            task_id: String::new(),
            title: String::new(),
            description: String::new(),
            reward_cents: 0,
            xp_reward: 0,
            poster_name: String::new(),
            poster_rating: 0.0,
            eligibility_status: ELIGIBILITY_CHECKING.to_string(),
            eligibility_reason: None,
        }
    }
}

/// Guard chain: `task.id` non-empty, `task.title` string, `poster.name`
/// string. Eligibility defaults to "checking"; the "ineligible" sentinel
/// refines the outcome to Blocked with the parsed props.
pub(crate) fn from_payload(payload: &Value) -> Result<AdapterOutcome<TaskDetailProps>, GuardError> {
    let task_id = guard::require_non_empty_str(payload, "task.id")?.to_string();
    let title = guard::require_str(payload, "task.title")?.to_string();
    let poster_name = guard::require_str(payload, "poster.name")?.to_string();

    let props = TaskDetailProps {
        task_id,
        title,
        description: guard::string_or(payload, "task.description", ""),
        reward_cents: guard::int_or(payload, "task.rewardCents", 0),
        xp_reward: guard::int_or(payload, "task.xpReward", 0),
        poster_name,
        poster_rating: guard::number_or(payload, "poster.rating", 0.0),
        eligibility_status: guard::string_or(payload, "eligibility.status", ELIGIBILITY_CHECKING),
        eligibility_reason: guard::opt_string(payload, "eligibility.reason"),
    };

    if props.eligibility_status == ELIGIBILITY_INELIGIBLE {
        Ok(AdapterOutcome::blocked(props))
    } else {
        Ok(AdapterOutcome::success(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::AdapterState;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "task": {"id": "t-7", "title": "Assemble shelf", "rewardCents": 2400},
            "poster": {"name": "Sam", "rating": 4.8},
            "eligibility": {"status": "eligible"}
        })
    }

    #[test]
    fn test_success() {
        let outcome = from_payload(&valid_payload()).unwrap();
        assert_eq!(outcome.state, AdapterState::Success);
        assert_eq!(outcome.props.task_id, "t-7");
        assert_eq!(outcome.props.poster_name, "Sam");
        assert_eq!(outcome.props.poster_rating, 4.8);
        assert_eq!(outcome.props.eligibility_status, "eligible");
    }

    #[test]
    fn test_eligibility_defaults_to_checking() {
        let payload = json!({
            "task": {"id": "t-7", "title": "Assemble shelf"},
            "poster": {"name": "Sam"}
        });
        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.state, AdapterState::Success);
        assert_eq!(outcome.props.eligibility_status, "checking");
    }

    #[test]
    fn test_ineligible_blocks_with_reason() {
        let payload = json!({
            "task": {"id": "t-7", "title": "Assemble shelf"},
            "poster": {"name": "Sam"},
            "eligibility": {"status": "ineligible", "reason": "trust tier too low"}
        });
        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.state, AdapterState::Blocked);
        assert_eq!(
            outcome.props.eligibility_reason.as_deref(),
            Some("trust tier too low")
        );
    }

    #[test]
    fn test_ineligible_without_reason() {
        let payload = json!({
            "task": {"id": "t-7", "title": "Assemble shelf"},
            "poster": {"name": "Sam"},
            "eligibility": {"status": "ineligible"}
        });
        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.state, AdapterState::Blocked);
        assert_eq!(outcome.props.eligibility_reason, None);
    }

    #[test]
    fn test_empty_task_id_is_an_error() {
        let payload = json!({
            "task": {"id": "", "title": "Assemble shelf"},
            "poster": {"name": "Sam"}
        });
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "task.id");
    }

    #[test]
    fn test_missing_poster_name_is_an_error() {
        let payload = json!({"task": {"id": "t-7", "title": "Assemble shelf"}});
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "poster.name");
    }
}
