//! # Observability Layer
//!
//! Domain-level error codes, the error-to-UI policy, and the structured
//! event sink for the marketplace client core.
//!
//! ## Overview
//!
//! - [`ErrorCode`] is the product-level error identifier: a superset of the
//!   transport codes plus domain conditions (eligibility, trust tier,
//!   maintenance, ...). Every transport failure maps onto exactly one of
//!   these via `From<TransportErrorCode>`.
//! - [`error_config`] is the single source of truth for how an error is
//!   surfaced: visual tone, recoverability, and the suggested recovery
//!   action. UI and logging never hardcode this elsewhere.
//! - [`LogSink`] receives structured [`LogEvent`]s; it is synchronous,
//!   infallible, and never touches the network. [`TracingSink`] forwards to
//!   `tracing` in development; [`NoopSink`] is the default elsewhere and
//!   the seam where an external crash/metrics forwarder would attach.
//! - [`logging::init_logging`] configures the `tracing-subscriber`
//!   infrastructure for hosts that want console output.

pub mod codes;
pub mod error;
pub mod event;
pub mod logging;
pub mod policy;
pub mod sink;

pub use codes::ErrorCode;
pub use error::{Error, Result};
pub use event::{LogEvent, LogLevel, LogScope};
pub use policy::{error_config, error_config_for, ErrorUiConfig, RecoveryAction, Tone};
pub use sink::{ErrorEventDetails, LogSink, Logger, NoopSink, TracingSink};
