//! Home summary screen shape.

use serde::Serialize;
use serde_json::Value;

use crate::guard::{self, GuardError};
use crate::outcome::AdapterOutcome;

/// Props for the home summary screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummaryProps {
    pub xp: i64,
    pub level: i64,
    pub trust_tier: i64,
    pub display_name: String,
    pub streak_days: i64,
    pub active_task_id: Option<String>,
}

impl HomeSummaryProps {
    /// Fixed stub returned on every error outcome.
    pub fn stub() -> Self {
        Self {
            xp: 0,
            level: 0,
            trust_tier: 0,
            display_name: String::new(),
            streak_days: 0,
            active_task_id: None,
        }
    }
}

/// Guard chain: `user` object with numeric `xp`, `level`, `trustTier`.
pub(crate) fn from_payload(payload: &Value) -> Result<AdapterOutcome<HomeSummaryProps>, GuardError> {
    guard::require_object(payload, "user")?;
    let xp = guard::require_int(payload, "user.xp")?;
    let level = guard::require_int(payload, "user.level")?;
    let trust_tier = guard::require_int(payload, "user.trustTier")?;

    Ok(AdapterOutcome::success(HomeSummaryProps {
        xp,
        level,
        trust_tier,
        display_name: guard::string_or(payload, "user.displayName", ""),
        streak_days: guard::int_or(payload, "user.streakDays", 0),
        active_task_id: guard::opt_string(payload, "activeTaskId"),
    }))
}
