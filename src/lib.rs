//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-adapters`, `core-observability`). Host
//! applications can depend on `sidequest-workspace` and enable the documented
//! features without needing to wire each crate individually.

#[cfg(feature = "client")]
pub use core_adapters as adapters;

#[cfg(feature = "client")]
pub use core_observability as observability;
