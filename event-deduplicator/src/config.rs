use common_telemetry::Channel;
use envconfig::Envconfig;

/// Configuration surface for the de-duplication job. Injected by the
/// process bootstrap; only the pieces this core consumes live here.
#[derive(Envconfig, Clone, Debug)]
pub struct DeduplicationConfig {
    #[envconfig(default = "unique_events")]
    pub unique_topic: String,

    #[envconfig(default = "duplicate_events")]
    pub duplicate_topic: String,
}

impl DeduplicationConfig {
    pub fn init_with_defaults() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }

    /// Topic a transport adapter should publish to for `channel`.
    /// `None` for channels this job never emits on.
    pub fn topic_for(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Unique => Some(&self.unique_topic),
            Channel::Duplicate => Some(&self.duplicate_topic),
            _ => None,
        }
    }
}
