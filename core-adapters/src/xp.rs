//! XP breakdown screen shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::guard::{self, GuardError};
use crate::outcome::AdapterOutcome;

/// One earned-XP event in the history list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XpHistoryEntry {
    pub occurred_at: String,
    pub source: String,
    pub amount: i64,
}

/// Per-category XP totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XpBreakdownEntry {
    pub category: String,
    pub amount: i64,
}

/// Props for the XP breakdown screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XpSummaryProps {
    pub total_xp: i64,
    pub level: i64,
    pub xp_to_next_level: i64,
    pub history: Vec<XpHistoryEntry>,
    pub breakdown: Vec<XpBreakdownEntry>,
}

impl XpSummaryProps {
    /// Fixed stub returned on every error outcome.
    pub fn stub() -> Self {
        Self {
            total_xp: 0,
            level: 0,
            xp_to_next_level: 0,
            history: Vec::new(),
            breakdown: Vec::new(),
        }
    }
}

/// Guard chain: numeric `totalXP`, `level`, `xpToNextLevel`; `history` and
/// `breakdown` default to `[]`. Empty only when both lists are empty.
pub(crate) fn from_payload(payload: &Value) -> Result<AdapterOutcome<XpSummaryProps>, GuardError> {
    let total_xp = guard::require_int(payload, "totalXP")?;
    let level = guard::require_int(payload, "level")?;
    let xp_to_next_level = guard::require_int(payload, "xpToNextLevel")?;

    let history: Vec<XpHistoryEntry> = guard::array_or(payload, "history")
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    let breakdown: Vec<XpBreakdownEntry> = guard::array_or(payload, "breakdown")
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let props = XpSummaryProps {
        total_xp,
        level,
        xp_to_next_level,
        history,
        breakdown,
    };

    if props.history.is_empty() && props.breakdown.is_empty() {
        Ok(AdapterOutcome::empty(props))
    } else {
        Ok(AdapterOutcome::success(props))
    }
}
