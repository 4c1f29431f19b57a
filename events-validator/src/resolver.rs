//! Schema path resolution: `{root}/{version}/{schema_name}`.

use std::path::PathBuf;

use common_telemetry::Event;

/// Compute the schema artifact location for an event. Summary (`ME_*`)
/// events resolve under the summary root, everything else under the
/// telemetry root. Pure function; existence is the schema source's
/// business.
///
/// A missing `ver` renders as an empty segment; the resulting path points
/// at nothing and the event takes the skip path downstream.
pub fn resolve_schema_path(event: &Event, telemetry_root: &str, summary_root: &str) -> PathBuf {
    let root = if event.is_summary_event() {
        summary_root
    } else {
        telemetry_root
    };
    let version = event.version().unwrap_or_default();
    PathBuf::from(format!("{root}/{version}/{}", event.schema_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> Event {
        Event::from_raw(&value.to_string()).unwrap()
    }

    #[test]
    fn telemetry_events_resolve_under_the_telemetry_root() {
        let event = event(json!({"eid": "AUDIT", "ver": "3.0"}));
        let path = resolve_schema_path(&event, "/schemas/telemetry", "/schemas/summary");
        assert_eq!(path, PathBuf::from("/schemas/telemetry/3.0/audit.json"));
    }

    #[test]
    fn summary_events_resolve_under_the_summary_root() {
        let event = event(json!({"eid": "ME_WORKFLOW_SUMMARY", "ver": "1.0"}));
        let path = resolve_schema_path(&event, "/schemas/telemetry", "/schemas/summary");
        assert_eq!(
            path,
            PathBuf::from("/schemas/summary/1.0/me_workflow_summary.json")
        );
    }

    #[test]
    fn missing_eid_resolves_to_the_envelope_schema() {
        let event = event(json!({"ver": "3.0"}));
        let path = resolve_schema_path(&event, "/schemas/telemetry", "/schemas/summary");
        assert_eq!(path, PathBuf::from("/schemas/telemetry/3.0/envelope.json"));
    }

    #[test]
    fn missing_version_renders_an_empty_segment() {
        let event = event(json!({"eid": "AUDIT"}));
        let path = resolve_schema_path(&event, "/schemas/telemetry", "/schemas/summary");
        assert_eq!(path, PathBuf::from("/schemas/telemetry//audit.json"));
    }
}
