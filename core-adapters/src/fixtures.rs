//! Mock fixture access.
//!
//! Fixtures are consumed, not owned: the host hands the adapter layer a
//! [`FixtureSource`] whose payloads are structurally identical to live
//! responses for their endpoint. The mock path cannot fail transport-wise,
//! but its payloads still run the full guard chain.

use core_config::Endpoint;
use serde_json::Value;
use std::collections::HashMap;

/// Provides the static payload for an endpoint configured off-live.
pub trait FixtureSource: Send + Sync {
    fn fixture(&self, endpoint: Endpoint) -> Option<Value>;
}

/// HashMap-backed fixture source for hosts and tests.
#[derive(Debug, Default)]
pub struct StaticFixtures {
    fixtures: HashMap<Endpoint, Value>,
}

impl StaticFixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: Endpoint, payload: Value) -> Self {
        self.fixtures.insert(endpoint, payload);
        self
    }
}

impl FixtureSource for StaticFixtures {
    fn fixture(&self, endpoint: Endpoint) -> Option<Value> {
        self.fixtures.get(&endpoint).cloned()
    }
}

/// Source with no fixtures at all; every mock-path read fails shape
/// sourcing and resolves to the adapter's error outcome.
#[derive(Debug, Default)]
pub struct NoFixtures;

impl FixtureSource for NoFixtures {
    fn fixture(&self, _endpoint: Endpoint) -> Option<Value> {
        None
    }
}
