//! # Transport Layer
//!
//! Issues single HTTP requests against the marketplace backend and converts
//! every possible failure mode into a value. Nothing in this crate panics or
//! propagates errors through any channel other than [`TransportResult`]:
//! network failures, timeouts, non-2xx statuses, and malformed bodies all
//! come back as a [`TransportError`] with a fixed [`TransportErrorCode`].
//!
//! ## Overview
//!
//! - [`HttpBackend`] abstracts the actual wire exchange so callers are
//!   testable without a network; [`ReqwestBackend`] is the production
//!   implementation.
//! - [`Transport`] owns the request lifecycle: header merging, JSON body
//!   serialization, the per-request deadline, status classification, and
//!   body parsing.
//! - [`classify_status`] is the single place a status code becomes an error.
//!
//! Retries, caching, and logging are deliberately absent here; recovery is a
//! caller decision and logging belongs to the adapter layer.

pub mod backend;
pub mod classify;
pub mod error;
pub mod reqwest_backend;
pub mod transport;

pub use backend::{BackendError, BackendRequest, BackendResponse, HttpBackend, HttpMethod};
pub use classify::classify_status;
pub use error::{TransportError, TransportErrorCode, TransportResult};
pub use reqwest_backend::ReqwestBackend;
pub use transport::{InjectedFault, RequestConfig, Transport, DEFAULT_TIMEOUT_MS};
