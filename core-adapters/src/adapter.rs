//! The adapter pipeline entry point.
//!
//! One method per screen data shape, all following the same algorithm:
//! pick the source (live transport call vs. static fixture), log transport
//! failures exactly once through the network scope, run the screen's guard
//! chain, refine the state, and always hand back fully-populated props.

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

use core_config::{build_url, ApiConfig, Endpoint};
use core_observability::{ErrorCode, ErrorEventDetails, LogScope, Logger};
use core_transport::{RequestConfig, Transport};

use crate::completion::{self, TaskCompletionProps};
use crate::detail::{self, TaskDetailProps};
use crate::feed::{self, TaskFeedProps};
use crate::fixtures::FixtureSource;
use crate::home::{self, HomeSummaryProps};
use crate::outcome::AdapterOutcome;
use crate::progress::{self, TaskProgressProps};
use crate::xp::{self, XpSummaryProps};

/// Screen data adapters over one transport, one config, one fixture
/// source, and one logger.
///
/// Invocations are independent: no cache, no deduplication, no shared
/// state between concurrent calls. Each call issues its own request and
/// produces its own outcome.
#[derive(Clone)]
pub struct Adapters {
    transport: Transport,
    config: ApiConfig,
    fixtures: Arc<dyn FixtureSource>,
    logger: Logger,
}

impl Adapters {
    pub fn new(
        transport: Transport,
        config: ApiConfig,
        fixtures: Arc<dyn FixtureSource>,
        logger: Logger,
    ) -> Self {
        Self {
            transport,
            config,
            fixtures,
            logger,
        }
    }

    /// Fetch the raw payload for an endpoint, or `None` when the screen
    /// should render its error state.
    ///
    /// A transport failure is logged here, exactly once, with enough
    /// metadata to reproduce the request. The mock path cannot fail
    /// transport-wise, so a missing fixture comes back silent; guard
    /// failures downstream are likewise not routed through the sink.
    async fn source_payload(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Option<Value> {
        if !self.config.is_live(endpoint) {
            return self.fixtures.fixture(endpoint);
        }

        let url = build_url(self.config.base_url(), endpoint.path(), params);
        let request = RequestConfig::default().timeout_ms(self.config.default_timeout_ms());

        match self.transport.get::<Value>(&url, request).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                let mut meta = serde_json::Map::new();
                meta.insert("endpoint".to_string(), json!(endpoint.name()));
                for (key, value) in params {
                    meta.insert((*key).to_string(), json!(value));
                }
                if let Some(status) = err.status_code {
                    meta.insert("statusCode".to_string(), json!(status));
                }

                self.logger.error(
                    LogScope::Network,
                    ErrorCode::from(err.code),
                    err.message.clone(),
                    ErrorEventDetails {
                        adapter: Some(endpoint.name().to_string()),
                        meta: Some(Value::Object(meta)),
                        ..Default::default()
                    },
                );
                None
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn home_summary(&self) -> AdapterOutcome<HomeSummaryProps> {
        match self.source_payload(Endpoint::HomeSummary, &[]).await {
            Some(payload) => home::from_payload(&payload)
                .unwrap_or_else(|_| AdapterOutcome::error(HomeSummaryProps::stub())),
            None => AdapterOutcome::error(HomeSummaryProps::stub()),
        }
    }

    #[instrument(skip(self))]
    pub async fn task_feed(&self) -> AdapterOutcome<TaskFeedProps> {
        match self.source_payload(Endpoint::TaskFeed, &[]).await {
            Some(payload) => feed::from_payload(&payload)
                .unwrap_or_else(|_| AdapterOutcome::error(TaskFeedProps::stub())),
            None => AdapterOutcome::error(TaskFeedProps::stub()),
        }
    }

    #[instrument(skip(self))]
    pub async fn task_detail(&self, task_id: &str) -> AdapterOutcome<TaskDetailProps> {
        match self
            .source_payload(Endpoint::TaskDetail, &[("taskId", task_id)])
            .await
        {
            Some(payload) => detail::from_payload(&payload)
                .unwrap_or_else(|_| AdapterOutcome::error(TaskDetailProps::stub())),
            None => AdapterOutcome::error(TaskDetailProps::stub()),
        }
    }

    #[instrument(skip(self))]
    pub async fn task_progress(&self, task_id: &str) -> AdapterOutcome<TaskProgressProps> {
        match self
            .source_payload(Endpoint::TaskProgress, &[("taskId", task_id)])
            .await
        {
            Some(payload) => progress::from_payload(&payload)
                .unwrap_or_else(|_| AdapterOutcome::error(TaskProgressProps::stub())),
            None => AdapterOutcome::error(TaskProgressProps::stub()),
        }
    }

    #[instrument(skip(self))]
    pub async fn task_completion(&self, task_id: &str) -> AdapterOutcome<TaskCompletionProps> {
        match self
            .source_payload(Endpoint::TaskCompletion, &[("taskId", task_id)])
            .await
        {
            Some(payload) => completion::from_payload(&payload)
                .unwrap_or_else(|_| AdapterOutcome::error(TaskCompletionProps::stub())),
            None => AdapterOutcome::error(TaskCompletionProps::stub()),
        }
    }

    #[instrument(skip(self))]
    pub async fn xp_summary(&self) -> AdapterOutcome<XpSummaryProps> {
        match self.source_payload(Endpoint::XpSummary, &[]).await {
            Some(payload) => xp::from_payload(&payload)
                .unwrap_or_else(|_| AdapterOutcome::error(XpSummaryProps::stub())),
            None => AdapterOutcome::error(XpSummaryProps::stub()),
        }
    }
}
