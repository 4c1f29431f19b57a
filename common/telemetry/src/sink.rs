//! Routing sink: named output channels abstracting the transport topics.

use std::fmt;
use std::sync::Mutex;

use crate::error::SinkError;
use crate::event::Event;

/// Named logical output destination. The transport adapter maps channels
/// onto topics; the pipeline stages only ever name the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Unique,
    Duplicate,
    Success,
    Failed,
    Error,
    Malformed,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Unique => "unique",
            Channel::Duplicate => "duplicate",
            Channel::Success => "success",
            Channel::Failed => "failed",
            Channel::Error => "error",
            Channel::Malformed => "malformed",
        };
        f.write_str(name)
    }
}

/// Payload shapes the pipeline emits.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    /// A (possibly mutated) event.
    Event(Event),
    /// An event plus a diagnostic line (failed and error channels).
    Annotated { event: Event, info: String },
    /// The raw transport payload; no event was built (malformed channel).
    Raw {
        payload: String,
        diagnostic: Option<String>,
    },
}

/// Sink capability consumed by the pipeline stages. Implementations own
/// their synchronization; emission is blocking from the stage's point of
/// view.
pub trait RouteSink {
    fn emit(&self, channel: Channel, emission: Emission) -> Result<(), SinkError>;
}

/// Sink that records emissions in memory, for tests and local harnesses.
#[derive(Debug, Default)]
pub struct RecordingSink {
    emissions: Mutex<Vec<(Channel, Emission)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> Vec<(Channel, Emission)> {
        self.emissions.lock().unwrap().clone()
    }

    pub fn on_channel(&self, channel: Channel) -> Vec<Emission> {
        self.emissions
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, emission)| emission.clone())
            .collect()
    }
}

impl RouteSink for RecordingSink {
    fn emit(&self, channel: Channel, emission: Emission) -> Result<(), SinkError> {
        self.emissions.lock().unwrap().push((channel, emission));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recording_sink_keeps_emission_order_and_filters_by_channel() {
        let sink = RecordingSink::new();
        let event = Event::from_raw(&json!({"mid": "m1"}).to_string()).unwrap();

        sink.emit(Channel::Unique, Emission::Event(event.clone()))
            .unwrap();
        sink.emit(
            Channel::Malformed,
            Emission::Raw {
                payload: "not json".to_string(),
                diagnostic: None,
            },
        )
        .unwrap();

        assert_eq!(sink.emissions().len(), 2);
        assert_eq!(sink.on_channel(Channel::Unique).len(), 1);
        assert_eq!(sink.on_channel(Channel::Duplicate).len(), 0);
    }

    #[test]
    fn channel_names_match_their_topics_vocabulary() {
        assert_eq!(Channel::Unique.to_string(), "unique");
        assert_eq!(Channel::Malformed.to_string(), "malformed");
    }
}
