//! Validation engine capability and the `jsonschema`-backed implementation.

use anyhow::Result;
use serde_json::Value;

/// One schema violation, with a JSON-pointer locator for the offending
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub pointer: String,
    pub message: String,
}

/// Structured outcome of validating one document against one schema.
/// Consumers read the violation list directly; nothing here round-trips
/// through report text.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    /// Locator of the first reported violation, used for the
    /// failed-channel message.
    pub fn first_pointer(&self) -> Option<&str> {
        self.violations.first().map(|v| v.pointer.as_str())
    }
}

/// Validation engine capability. A fault here (schema fails to compile,
/// engine internal error) is distinct from a validation failure and routes
/// the event to the error channel.
pub trait ValidationEngine {
    fn validate(&self, schema: &Value, document: &Value) -> Result<ValidationReport>;
}

/// Engine backed by the `jsonschema` crate. Schemas are compiled per call;
/// callers that validate many events against few schemas can wrap this
/// engine with a cache.
#[derive(Debug, Default)]
pub struct JsonSchemaEngine;

impl JsonSchemaEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationEngine for JsonSchemaEngine {
    fn validate(&self, schema: &Value, document: &Value) -> Result<ValidationReport> {
        // The compile error borrows the schema, so stringify it here.
        let compiled = jsonschema::JSONSchema::compile(schema)
            .map_err(|e| anyhow::anyhow!("schema compilation failed: {e}"))?;

        let violations = match compiled.validate(document) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|error| Violation {
                    pointer: error.instance_path.to_string(),
                    message: error.to_string(),
                })
                .collect(),
        };

        Ok(ValidationReport { violations })
    }
}
