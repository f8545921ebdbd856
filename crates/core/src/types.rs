/// Entity identifiers are opaque, system-generated alphanumeric strings.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
