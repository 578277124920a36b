/// All primary keys in the hosted database are UUIDs generated by the store.
pub type DbId = uuid::Uuid;

/// Identifier of an authenticated user (the auth provider's `sub`).
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
