//! Schema validation job core.
//!
//! Consumes one message at a time, resolves the versioned schema artifact
//! for the event, validates the event document against it, and routes to
//! exactly one channel: success (valid or schema missing), failed
//! (validation violations), error (unexpected fault), or malformed (the
//! payload never parsed).

pub mod config;
pub mod engine;
pub mod metrics_const;
pub mod resolver;
pub mod schemas;
pub mod service;
pub mod source;

pub use config::ValidatorConfig;
pub use engine::{JsonSchemaEngine, ValidationEngine, ValidationReport, Violation};
pub use resolver::resolve_schema_path;
pub use schemas::{FileSchemaSource, SchemaSource};
pub use service::EventsValidator;
pub use source::{EventSource, RawMessage};
