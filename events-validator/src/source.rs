//! Event source capability: one transport message viewed as an event.

use common_telemetry::Event;

/// One incoming message. `event` materializes the payload into an
/// [`Event`]; when that fails the raw `message` is what gets routed to the
/// malformed channel.
pub trait EventSource {
    fn event(&self) -> Result<Event, serde_json::Error>;
    fn message(&self) -> &str;
}

/// The standard source over one raw transport payload.
#[derive(Debug, Clone)]
pub struct RawMessage {
    payload: String,
}

impl RawMessage {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl EventSource for RawMessage {
    fn event(&self) -> Result<Event, serde_json::Error> {
        Event::from_raw(&self.payload)
    }

    fn message(&self) -> &str {
        &self.payload
    }
}
