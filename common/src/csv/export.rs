use chrono::NaiveDate;

use crate::model::attendee::AttendeeRecord;

pub const EXPORT_HEADER: &str = "First Name,Last Name,Email,Source";

/// Serializes the roster in order, one newline-terminated line per record.
/// A missing source is written as an empty last field. Nothing is escaped.
pub fn export_csv(records: &[AttendeeRecord]) -> String {
    let mut csv = String::with_capacity(EXPORT_HEADER.len() + 1 + records.len() * 48);
    csv.push_str(EXPORT_HEADER);
    csv.push('\n');
    for record in records {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            record.first_name,
            record.last_name,
            record.email,
            record.source.as_deref().unwrap_or("")
        ));
    }
    csv
}

/// `<prefix>-YYYY-MM-DD.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", prefix, date.format("%Y-%m-%d"))
}
