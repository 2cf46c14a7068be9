//! Adapter result types.

use serde::Serialize;

/// Which UI state a screen should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterState {
    Loading,
    Success,
    Empty,
    Error,
    Blocked,
}

/// A UI state plus the props for rendering it.
///
/// `props` is always fully populated: error outcomes carry the adapter's
/// fixed stub object, so rendering code never null-checks. Constructed once
/// per adapter invocation and handed to the caller; never cached or shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterOutcome<P> {
    pub state: AdapterState,
    pub props: P,
}

impl<P> AdapterOutcome<P> {
    /// Pre-invocation state for screens that render before data arrives.
    pub fn loading(props: P) -> Self {
        Self {
            state: AdapterState::Loading,
            props,
        }
    }

    pub fn success(props: P) -> Self {
        Self {
            state: AdapterState::Success,
            props,
        }
    }

    pub fn empty(props: P) -> Self {
        Self {
            state: AdapterState::Empty,
            props,
        }
    }

    pub fn error(props: P) -> Self {
        Self {
            state: AdapterState::Error,
            props,
        }
    }

    pub fn blocked(props: P) -> Self {
        Self {
            state: AdapterState::Blocked,
            props,
        }
    }
}
