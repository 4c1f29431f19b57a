pub const VALID_EVENTS_TOTAL_COUNTER: &str = "validator_valid_events_total";
pub const INVALID_EVENTS_TOTAL_COUNTER: &str = "validator_invalid_events_total";
pub const SKIPPED_EVENTS_TOTAL_COUNTER: &str = "validator_skipped_events_total";
pub const MALFORMED_EVENTS_TOTAL_COUNTER: &str = "validator_malformed_events_total";
pub const UNEXPECTED_FAILURES_TOTAL_COUNTER: &str = "validator_unexpected_failures_total";
