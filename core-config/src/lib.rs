//! # API Configuration
//!
//! The endpoint registry and the injected configuration surface for the
//! data-adapter pipeline: which endpoints exist, where the backend lives,
//! and which endpoints are served live versus from static fixtures.
//!
//! Adapters receive an [`ApiConfig`] explicitly at construction; there is
//! no ambient singleton to import or mock.

pub mod config;
pub mod endpoints;
pub mod url;

pub use config::{ApiConfig, ApiConfigBuilder, ConfigError};
pub use endpoints::Endpoint;
pub use url::build_url;
