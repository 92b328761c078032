/// All entity collection ids are process-local sequential integers,
/// assigned by the owning store on insert.
pub type EntityId = i64;

/// Calendar fields (join dates, due dates, maintenance windows) carry no
/// time component.
pub type Date = chrono::NaiveDate;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
