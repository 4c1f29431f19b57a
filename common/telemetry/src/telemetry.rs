//! Path-addressed access to one event's nested key-value document.

use serde_json::{Map, Value};
use tracing::debug;

/// The nested key-value document representing one event's full payload.
///
/// Keys keep their insertion order. Reads and writes address leaves with
/// dotted paths (`"metadata.checksum"`); writes create missing intermediate
/// objects but never replace an existing intermediate that is not an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    root: Map<String, Value>,
}

impl Telemetry {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parse a raw transport payload. The top level must be a JSON object.
    pub fn from_raw(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object at the top level, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Dotted-path read. `None` when any segment is missing or an
    /// intermediate segment is not an object.
    pub fn read(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let value = current.get(segment)?;
            if segments.peek().is_none() {
                return Some(value);
            }
            current = value.as_object()?;
        }
        None
    }

    /// Dotted-path read of a string leaf. Explicit `null` and non-string
    /// leaves read as `None`.
    pub fn read_str(&self, path: &str) -> Option<&str> {
        self.read(path).and_then(Value::as_str)
    }

    /// Dotted-path write, creating missing intermediate objects. An existing
    /// intermediate that is not an object is left untouched and the write is
    /// dropped.
    pub fn set(&mut self, path: &str, value: Value) {
        let (parents, leaf) = match path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, path),
        };

        let mut current = &mut self.root;
        if let Some(parents) = parents {
            for segment in parents.split('.') {
                let slot = current
                    .entry(segment.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                match slot.as_object_mut() {
                    Some(next) => current = next,
                    None => {
                        debug!(path, segment, "refusing to replace non-object intermediate");
                        return;
                    }
                }
            }
        }
        current.insert(leaf.to_string(), value);
    }

    /// Write only when the leaf is currently absent (or explicit `null`).
    /// Present values, including `false` and empty objects, are kept.
    pub fn set_if_absent(&mut self, path: &str, value: Value) {
        if matches!(self.read(path), None | Some(Value::Null)) {
            self.set(path, value);
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.root
    }

    /// Whole-document view, for handing to a validation engine.
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Serialize the document for wire output.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.root)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
