/// All database primary keys are PostgreSQL UUID (v4, generated on insert).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
