pub const UNIQUE_EVENTS_TOTAL_COUNTER: &str = "dedup_unique_events_total";
pub const DUPLICATE_EVENTS_TOTAL_COUNTER: &str = "dedup_duplicate_events_total";
pub const MISSING_CHECKSUM_TOTAL_COUNTER: &str = "dedup_missing_checksum_total";
