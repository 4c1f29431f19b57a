//! End-to-end routing matrix for the validator: one emission per message,
//! on the right channel, with the right payload shape.

use std::fs;

use common_telemetry::{Channel, Emission, RecordingSink};
use events_validator::{
    EventsValidator, FileSchemaSource, JsonSchemaEngine, RawMessage, ValidatorConfig,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn config_for(roots: &TempDir) -> ValidatorConfig {
    ValidatorConfig {
        success_topic: "valid_events".to_string(),
        failed_topic: "failed_events".to_string(),
        error_topic: "error_events".to_string(),
        malformed_topic: "malformed_events".to_string(),
        telemetry_schema_path: roots
            .path()
            .join("telemetry")
            .to_string_lossy()
            .into_owned(),
        summary_schema_path: roots.path().join("summary").to_string_lossy().into_owned(),
        job_name: "events-validator".to_string(),
    }
}

fn write_schema(roots: &TempDir, kind: &str, version: &str, name: &str, schema: &Value) {
    let dir = roots.path().join(kind).join(version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), schema.to_string()).unwrap();
}

#[test]
fn each_message_lands_on_exactly_one_channel() {
    let roots = TempDir::new().unwrap();
    write_schema(
        &roots,
        "telemetry",
        "3.0",
        "audit.json",
        &json!({
            "type": "object",
            "properties": {
                "data": {
                    "type": "object",
                    "properties": {"id": {"type": "string"}},
                    "required": ["id"]
                }
            },
            "required": ["data"]
        }),
    );
    write_schema(
        &roots,
        "summary",
        "1.0",
        "me_workflow_summary.json",
        &json!({"type": "object", "required": ["mid"]}),
    );

    let service = EventsValidator::new(
        config_for(&roots),
        FileSchemaSource::new(),
        JsonSchemaEngine::new(),
    );
    let sink = RecordingSink::new();

    let messages = [
        // valid telemetry event
        json!({"eid": "AUDIT", "ver": "3.0", "mid": "m1", "data": {"id": "d1"}}).to_string(),
        // invalid telemetry event (wrong type at /data/id)
        json!({"eid": "AUDIT", "ver": "3.0", "mid": "m2", "data": {"id": 42}}).to_string(),
        // summary event against the summary root
        json!({"eid": "ME_WORKFLOW_SUMMARY", "ver": "1.0", "mid": "m3"}).to_string(),
        // unknown event type, no schema on disk
        json!({"eid": "BRAND_NEW", "ver": "3.0", "mid": "m4"}).to_string(),
        // unparseable payload
        "{'metadata':{'checksum':'x'}".to_string(),
    ];

    for message in &messages {
        service.process(&RawMessage::new(message), &sink).unwrap();
    }

    assert_eq!(sink.emissions().len(), messages.len());
    assert_eq!(sink.on_channel(Channel::Success).len(), 3); // valid + summary + skipped
    assert_eq!(sink.on_channel(Channel::Failed).len(), 1);
    assert_eq!(sink.on_channel(Channel::Malformed).len(), 1);
    assert_eq!(sink.on_channel(Channel::Error).len(), 0);

    let Emission::Annotated { info, .. } = &sink.on_channel(Channel::Failed)[0] else {
        panic!("failed channel should carry an annotated event");
    };
    assert_eq!(info, "Invalid field:/data/id");

    let Emission::Raw { payload, .. } = &sink.on_channel(Channel::Malformed)[0] else {
        panic!("malformed channel should carry the raw payload");
    };
    assert_eq!(payload, "{'metadata':{'checksum':'x'}");
}

#[test]
fn skip_and_success_are_distinguishable_by_their_flags() {
    let roots = TempDir::new().unwrap();
    write_schema(
        &roots,
        "telemetry",
        "3.0",
        "audit.json",
        &json!({"type": "object"}),
    );

    let service = EventsValidator::new(
        config_for(&roots),
        FileSchemaSource::new(),
        JsonSchemaEngine::new(),
    );
    let sink = RecordingSink::new();

    service
        .process(
            &RawMessage::new(json!({"eid": "AUDIT", "ver": "3.0"}).to_string()),
            &sink,
        )
        .unwrap();
    service
        .process(
            &RawMessage::new(json!({"eid": "NO_SCHEMA", "ver": "3.0"}).to_string()),
            &sink,
        )
        .unwrap();

    let emissions = sink.on_channel(Channel::Success);
    assert_eq!(emissions.len(), 2);

    let Emission::Event(validated) = &emissions[0] else {
        panic!("expected a bare event");
    };
    assert_eq!(
        validated.telemetry().read("flags.dv_processed"),
        Some(&json!(true))
    );
    assert_eq!(validated.telemetry().read("flags.dv_skipped"), None);

    let Emission::Event(skipped) = &emissions[1] else {
        panic!("expected a bare event");
    };
    assert_eq!(
        skipped.telemetry().read("flags.dv_skipped"),
        Some(&json!(true))
    );
    assert_eq!(skipped.telemetry().read("flags.dv_processed"), None);
}
