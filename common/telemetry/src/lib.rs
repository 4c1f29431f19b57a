//! Shared domain layer for the telemetry routing pipeline.
//!
//! Holds the pieces both pipeline jobs consume: the [`Telemetry`] document
//! accessor, the [`Event`] wrapper built on top of it, the routing sink
//! abstraction, the checksum store capability, and the shared error types.
//!
//! ## Error logging (anyhow)
//!
//! When logging `anyhow::Error` or other error types that carry a cause
//! chain, use formats that include the full chain so root causes are visible
//! in logs:
//!
//! - **Inline format:** `{e:#}` — full chain on one line.
//! - **Structured field:** `error = ?e` — full chain with `Caused by:` sections.
//!
//! Avoid `{}` / `%e` (Display) for errors — they only show the top-level
//! message and hide the chain.

pub mod error;
pub mod event;
pub mod sink;
pub mod store;
pub mod telemetry;

pub use error::{PipelineError, SinkError, StoreError};
pub use event::Event;
pub use sink::{Channel, Emission, RecordingSink, RouteSink};
pub use store::{ChecksumStore, InMemoryChecksumStore};
pub use telemetry::Telemetry;
