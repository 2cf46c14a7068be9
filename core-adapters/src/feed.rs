//! Task feed screen shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::guard::{self, GuardError};
use crate::outcome::AdapterOutcome;

/// One card in the task feed.
///
/// Entries deserialize leniently: absent fields default, and an entry whose
/// present fields have the wrong types is dropped rather than failing the
/// whole feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: String,
    pub title: String,
    pub reward_cents: i64,
    pub xp_reward: i64,
    pub distance_meters: Option<i64>,
    pub posted_at: String,
    pub urgent: bool,
}

/// Props for the task feed screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFeedProps {
    pub tasks: Vec<TaskSummary>,
    pub has_more: bool,
    pub last_updated_at: String,
    pub filters: Map<String, Value>,
    pub system_status: Option<Value>,
}

impl TaskFeedProps {
    /// Fixed stub returned on every error outcome.
    pub fn stub() -> Self {
        Self {
            tasks: Vec::new(),
            has_more: false,
            last_updated_at: String::new(),
            filters: Map::new(),
            system_status: None,
        }
    }
}

/// Guard chain: non-empty string `lastUpdatedAt`; `tasks` defaults to `[]`
/// when absent or not an array. An empty feed is the Empty state, not an
/// error.
pub(crate) fn from_payload(payload: &Value) -> Result<AdapterOutcome<TaskFeedProps>, GuardError> {
    let last_updated_at = guard::require_non_empty_str(payload, "lastUpdatedAt")?.to_string();

    let tasks: Vec<TaskSummary> = guard::array_or(payload, "tasks")
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let props = TaskFeedProps {
        has_more: guard::bool_or(payload, "hasMore", false),
        last_updated_at,
        filters: guard::object_or(payload, "filters"),
        system_status: guard::opt_value(payload, "systemStatus"),
        tasks,
    };

    if props.tasks.is_empty() {
        Ok(AdapterOutcome::empty(props))
    } else {
        Ok(AdapterOutcome::success(props))
    }
}
