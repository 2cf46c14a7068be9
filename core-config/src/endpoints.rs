//! Endpoint registry.

use serde::{Deserialize, Serialize};

/// Every backend endpoint the adapter layer reads from.
///
/// Paths are colon-parameterized templates; [`build_url`](crate::build_url)
/// substitutes `:name` tokens by exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    HomeSummary,
    TaskFeed,
    TaskDetail,
    TaskProgress,
    TaskCompletion,
    XpSummary,
}

impl Endpoint {
    /// Colon-parameterized path template relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::HomeSummary => "/v1/home/summary",
            Self::TaskFeed => "/v1/tasks/feed",
            Self::TaskDetail => "/v1/tasks/:taskId",
            Self::TaskProgress => "/v1/tasks/:taskId/progress",
            Self::TaskCompletion => "/v1/tasks/:taskId/completion",
            Self::XpSummary => "/v1/xp/summary",
        }
    }

    /// Stable name used in log event metadata.
    pub fn name(self) -> &'static str {
        match self {
            Self::HomeSummary => "home_summary",
            Self::TaskFeed => "task_feed",
            Self::TaskDetail => "task_detail",
            Self::TaskProgress => "task_progress",
            Self::TaskCompletion => "task_completion",
            Self::XpSummary => "xp_summary",
        }
    }

    pub const ALL: [Endpoint; 6] = [
        Self::HomeSummary,
        Self::TaskFeed,
        Self::TaskDetail,
        Self::TaskProgress,
        Self::TaskCompletion,
        Self::XpSummary,
    ];
}
