//! Task completion screen shape.

use serde::Serialize;
use serde_json::Value;

use crate::guard::{self, GuardError};
use crate::outcome::AdapterOutcome;

/// Review lifecycle of the runner's completion submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Submitted,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Props for the task completion screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletionProps {
    pub task_id: String,
    pub task_title: String,
    pub earnings_amount: f64,
    pub currency: String,
    pub tip_amount: f64,
    pub xp_awarded: i64,
    pub submission_status: SubmissionStatus,
    pub submitted_at: Option<String>,
}

impl TaskCompletionProps {
    /// Fixed stub returned on every error outcome.
    pub fn stub() -> Self {
        Self {
            task_id: String::new(),
            task_title: String::new(),
            earnings_amount: 0.0,
            currency: "USD".to_string(),
            tip_amount: 0.0,
            xp_awarded: 0,
            submission_status: SubmissionStatus::default(),
            submitted_at: None,
        }
    }
}

/// Guard chain: `task` and `earnings` objects, `task.id` non-empty,
/// `earnings.amount` numeric, `submission.status` (default "pending")
/// drawn from the submission enum.
pub(crate) fn from_payload(
    payload: &Value,
) -> Result<AdapterOutcome<TaskCompletionProps>, GuardError> {
    guard::require_object(payload, "task")?;
    guard::require_object(payload, "earnings")?;
    let task_id = guard::require_non_empty_str(payload, "task.id")?.to_string();
    let earnings_amount = guard::require_number(payload, "earnings.amount")?;

    let status_raw = guard::string_or(payload, "submission.status", "pending");
    let submission_status = SubmissionStatus::parse(&status_raw)
        .ok_or_else(|| GuardError::new("submission.status", "has an unexpected value"))?;

    Ok(AdapterOutcome::success(TaskCompletionProps {
        task_id,
        task_title: guard::string_or(payload, "task.title", ""),
        earnings_amount,
        currency: guard::string_or(payload, "earnings.currency", "USD"),
        tip_amount: guard::number_or(payload, "earnings.tipAmount", 0.0),
        xp_awarded: guard::int_or(payload, "earnings.xpAwarded", 0),
        submission_status,
        submitted_at: guard::opt_string(payload, "submission.submittedAt"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::AdapterState;
    use serde_json::json;

    #[test]
    fn test_success_with_defaults() {
        let payload = json!({
            "task": {"id": "t-5", "title": "Dog walk"},
            "earnings": {"amount": 18.5, "xpAwarded": 40}
        });

        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.state, AdapterState::Success);
        assert_eq!(outcome.props.earnings_amount, 18.5);
        assert_eq!(outcome.props.currency, "USD");
        assert_eq!(outcome.props.submission_status, SubmissionStatus::Pending);
        assert_eq!(outcome.props.xp_awarded, 40);
    }

    #[test]
    fn test_explicit_submission_status() {
        let payload = json!({
            "task": {"id": "t-5"},
            "earnings": {"amount": 18.5},
            "submission": {"status": "approved", "submittedAt": "2025-01-30T13:00:00.000Z"}
        });
        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.props.submission_status, SubmissionStatus::Approved);
        assert_eq!(
            outcome.props.submitted_at.as_deref(),
            Some("2025-01-30T13:00:00.000Z")
        );
    }

    #[test]
    fn test_unknown_submission_status_is_an_error() {
        let payload = json!({
            "task": {"id": "t-5"},
            "earnings": {"amount": 18.5},
            "submission": {"status": "archived"}
        });
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "submission.status");
    }

    #[test]
    fn test_missing_earnings_object() {
        let payload = json!({"task": {"id": "t-5"}});
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "earnings");
    }

    #[test]
    fn test_non_numeric_amount() {
        let payload = json!({"task": {"id": "t-5"}, "earnings": {"amount": "18.50"}});
        let err = from_payload(&payload).unwrap_err();
        assert_eq!(err.path, "earnings.amount");
    }

    #[test]
    fn test_zero_amount_preserved() {
        let payload = json!({"task": {"id": "t-5"}, "earnings": {"amount": 0}});
        let outcome = from_payload(&payload).unwrap();
        assert_eq!(outcome.props.earnings_amount, 0.0);
    }
}
