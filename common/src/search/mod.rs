//! Live search over the roster.

use crate::model::attendee::AttendeeRecord;

/// Returns the records whose full name (`first last`) or e-mail contains
/// `query`, ignoring case, in roster order. An empty query keeps everything.
pub fn filter<'a>(records: &'a [AttendeeRecord], query: &str) -> Vec<&'a AttendeeRecord> {
    let query = query.to_lowercase();
    records.iter().filter(|r| matches_lowercase(r, &query)).collect()
}

/// Single-record form of [`filter`].
pub fn matches(record: &AttendeeRecord, query: &str) -> bool {
    matches_lowercase(record, &query.to_lowercase())
}

fn matches_lowercase(record: &AttendeeRecord, query: &str) -> bool {
    record.full_name().to_lowercase().contains(query) || record.email.to_lowercase().contains(query)
}
