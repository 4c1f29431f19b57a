//! One pipeline event: identity, classification, and processing marks over
//! its telemetry document.

use serde_json::{json, Value};

use crate::telemetry::Telemetry;

const SUMMARY_EVENT_PREFIX: &str = "ME_";
const DEFAULT_SCHEMA_NAME: &str = "envelope.json";

/// Wraps exactly one [`Telemetry`] document. Constructed once per incoming
/// message, mutated in place by exactly one pipeline stage, then handed to
/// the sink; never reused across messages.
///
/// Identity fields are computed from the document on every call, never
/// cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    telemetry: Telemetry,
}

impl Event {
    pub fn new(telemetry: Telemetry) -> Self {
        Self { telemetry }
    }

    /// Parse one raw transport payload into an event.
    pub fn from_raw(raw: &str) -> Result<Self, serde_json::Error> {
        Telemetry::from_raw(raw).map(Self::new)
    }

    /// `metadata.checksum`, when the producer stamped one.
    pub fn id(&self) -> Option<&str> {
        self.telemetry.read_str("metadata.checksum")
    }

    pub fn mid(&self) -> Option<&str> {
        self.telemetry.read_str("mid")
    }

    /// Deduplication identity: `metadata.checksum`, falling back to `mid`.
    pub fn checksum(&self) -> Option<&str> {
        self.id().or_else(|| self.mid())
    }

    pub fn eid(&self) -> Option<&str> {
        self.telemetry.read_str("eid")
    }

    pub fn pid(&self) -> Option<&str> {
        self.telemetry.read_str("context.pdata.pid")
    }

    pub fn version(&self) -> Option<&str> {
        self.telemetry.read_str("ver")
    }

    /// File name of the schema artifact this event validates against:
    /// lowercased `eid` plus `.json`, or the envelope schema when `eid`
    /// is absent.
    pub fn schema_name(&self) -> String {
        match self.eid() {
            Some(eid) => format!("{}.json", eid.to_lowercase()),
            None => DEFAULT_SCHEMA_NAME.to_string(),
        }
    }

    /// Summary (rollup) events validate against a distinct schema root.
    pub fn is_summary_event(&self) -> bool {
        self.eid()
            .is_some_and(|eid| eid.starts_with(SUMMARY_EVENT_PREFIX))
    }

    pub fn mark_success(&mut self) {
        self.telemetry.set_if_absent("flags", json!({}));
        self.telemetry.set("flags.dv_processed", json!(true));
        self.telemetry.set("type", json!("events"));
    }

    pub fn mark_failure(&mut self, error: Option<&str>, job_name: &str) {
        self.telemetry.set_if_absent("flags", json!({}));
        self.telemetry.set("flags.dv_processed", json!(false));
        self.telemetry.set_if_absent("metadata", json!({}));
        if let Some(error) = error {
            self.telemetry.set("metadata.dv_error", json!(error));
            self.telemetry.set("metadata.src", json!(job_name));
        }
    }

    pub fn mark_skipped(&mut self) {
        self.telemetry.set_if_absent("flags", json!({}));
        self.telemetry.set("flags.dv_skipped", json!(true));
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Whole-document view, for handing to a validation engine.
    pub fn to_value(&self) -> Value {
        self.telemetry.to_value()
    }

    /// Serialize the document for wire output.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.telemetry.to_json()
    }
}
