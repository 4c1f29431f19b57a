use common_telemetry::Channel;
use envconfig::Envconfig;

/// Configuration surface for the validator job. Injected by the process
/// bootstrap; only the pieces this core consumes live here.
#[derive(Envconfig, Clone, Debug)]
pub struct ValidatorConfig {
    #[envconfig(default = "valid_events")]
    pub success_topic: String,

    #[envconfig(default = "failed_events")]
    pub failed_topic: String,

    #[envconfig(default = "error_events")]
    pub error_topic: String,

    #[envconfig(default = "malformed_events")]
    pub malformed_topic: String,

    /// Root directory of versioned telemetry schemas:
    /// `{root}/{ver}/{eid}.json`.
    #[envconfig(default = "/etc/schemas/telemetry")]
    pub telemetry_schema_path: String,

    /// Root directory of versioned summary (`ME_*`) schemas.
    #[envconfig(default = "/etc/schemas/summary")]
    pub summary_schema_path: String,

    /// Stamped into `metadata.src` when a failure annotation is applied.
    #[envconfig(default = "events-validator")]
    pub job_name: String,
}

impl ValidatorConfig {
    pub fn init_with_defaults() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }

    /// Topic a transport adapter should publish to for `channel`.
    /// `None` for channels this job never emits on.
    pub fn topic_for(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Success => Some(&self.success_topic),
            Channel::Failed => Some(&self.failed_topic),
            Channel::Error => Some(&self.error_topic),
            Channel::Malformed => Some(&self.malformed_topic),
            Channel::Unique | Channel::Duplicate => None,
        }
    }
}
