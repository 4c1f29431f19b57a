//! Unique-vs-duplicate decision over the checksum store.

use common_telemetry::{Channel, ChecksumStore, Emission, Event, PipelineError, RouteSink};
use metrics::counter;
use tracing::{debug, warn};

use crate::metrics_const::{
    DUPLICATE_EVENTS_TOTAL_COUNTER, MISSING_CHECKSUM_TOTAL_COUNTER, UNIQUE_EVENTS_TOTAL_COUNTER,
};

/// Routes each event to the unique or duplicate channel based on whether
/// its checksum is already present in the store.
///
/// The lookup and the subsequent write are not atomic: two instances
/// processing the same checksum concurrently can both observe a miss and
/// both route unique. That race is accepted under the pipeline's
/// at-least-once delivery; strict uniqueness would need a check-and-set
/// capability on the store.
#[derive(Debug, Default)]
pub struct DeduplicationFilter;

impl DeduplicationFilter {
    pub fn new() -> Self {
        Self
    }

    /// Decide unique vs duplicate for one event.
    ///
    /// Exactly one store read, at most one store write (unique path only),
    /// exactly one emission. Store faults propagate to the caller: with the
    /// store down the uniqueness decision is unreliable and the message
    /// must not be acked.
    pub fn process<S, R>(&self, event: Event, store: &S, sink: &R) -> Result<(), PipelineError>
    where
        S: ChecksumStore + ?Sized,
        R: RouteSink + ?Sized,
    {
        let checksum = match event.checksum() {
            Some(checksum) => checksum.to_string(),
            None => {
                warn!("event carries neither metadata.checksum nor mid, cannot deduplicate");
                counter!(MISSING_CHECKSUM_TOTAL_COUNTER).increment(1);
                return Err(PipelineError::MissingChecksum);
            }
        };

        if store.get(&checksum)?.is_some() {
            debug!(checksum = %checksum, "duplicate event");
            counter!(DUPLICATE_EVENTS_TOTAL_COUNTER).increment(1);
            sink.emit(Channel::Duplicate, Emission::Event(event))?;
            return Ok(());
        }

        // The mid marks the entry as seen; fall back to the checksum itself
        // for events that resolved their checksum from metadata only.
        let marker = event.mid().unwrap_or(checksum.as_str()).to_string();

        debug!(checksum = %checksum, "unique event");
        counter!(UNIQUE_EVENTS_TOTAL_COUNTER).increment(1);
        sink.emit(Channel::Unique, Emission::Event(event))?;
        store.put(&checksum, &marker)?;
        Ok(())
    }
}
