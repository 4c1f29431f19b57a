//! Error taxonomy shared by the pipeline jobs.
//!
//! Malformed payloads and validation failures are routing outcomes, not
//! errors — they surface as channel emissions, never as `Err`. The variants
//! here are the faults that must reach the caller: an unreliable checksum
//! store, a sink that failed to emit, and the dedup contract violation.

use thiserror::Error;

use crate::sink::Channel;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("checksum store unavailable: {0}")]
    Unavailable(String),
    #[error("checksum store operation failed: {0}")]
    Operation(String),
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to emit to the {channel} channel: {reason}")]
    Emit { channel: Channel, reason: String },
}

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The event resolves no checksum through either `metadata.checksum`
    /// or `mid`; the dedup decision would be meaningless.
    #[error("event resolves no checksum (metadata.checksum and mid both absent)")]
    MissingChecksum,

    /// A store fault makes the uniqueness decision unreliable; it must
    /// reach the caller rather than be swallowed.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
