//! De-duplication job core.
//!
//! Consumes one event at a time, decides unique vs duplicate against the
//! checksum store, and emits to exactly one channel. The transport layer
//! owns consumption, production, and offsets; it hands this crate a
//! materialized [`common_telemetry::Event`] and a sink.

pub mod config;
pub mod filter;
pub mod metrics_const;

pub use config::DeduplicationConfig;
pub use filter::DeduplicationFilter;
