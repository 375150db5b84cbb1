//! User-facing notifications produced by the roster workflows.
//!
//! The frontend renders each [`Notice`] as a short-lived toast; nothing here
//! touches the DOM so the wording can be checked in tests.

use crate::error::{ParseError, RosterError};
use crate::model::attendee::AttendeeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    /// Errors and destructive actions.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    fn new(title: &str, description: String, tone: Tone) -> Self {
        Self {
            title: title.to_string(),
            description,
            tone,
        }
    }

    pub fn imported(count: usize) -> Self {
        Self::new("Success", format!("Uploaded {} attendees", count), Tone::Neutral)
    }

    pub fn import_failed(err: &ParseError) -> Self {
        let description = match err {
            ParseError::NoRecords => "No valid attendees found in CSV",
            ParseError::Undecodable(_) | ParseError::Unreadable(_) => "Failed to parse CSV file",
        };
        Self::new("Error", description.to_string(), Tone::Destructive)
    }

    pub fn checked_in(record: &AttendeeRecord) -> Self {
        Self::new(
            "Checked In",
            format!("{} has been checked in.", record.full_name()),
            Tone::Neutral,
        )
    }

    pub fn reset() -> Self {
        Self::new(
            "Reset",
            "Attendees list has been reset".to_string(),
            Tone::Destructive,
        )
    }

    pub fn restore_failed() -> Self {
        Self::new(
            "Error",
            "Saved attendees could not be restored".to_string(),
            Tone::Destructive,
        )
    }

    pub fn download_failed() -> Self {
        Self::new(
            "Error",
            "Could not generate the CSV download".to_string(),
            Tone::Destructive,
        )
    }

    /// Maps any roster failure to a notice; parse errors keep their import wording.
    pub fn roster_failed(err: &RosterError) -> Self {
        match err {
            RosterError::Parse(parse) => Self::import_failed(parse),
            RosterError::EmptyRoster => Self::import_failed(&ParseError::NoRecords),
            other => Self::new(
                "Error",
                format!("Could not save attendees: {}", other),
                Tone::Destructive,
            ),
        }
    }
}
