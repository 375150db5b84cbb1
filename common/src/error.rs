//! Error types for roster import, persistence and the check-in workflow.

use thiserror::Error;

/// Result type for roster store operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Reasons an attendee file could not be turned into a roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Every line was either the header, blank, or had fewer than three fields.
    #[error("no records")]
    NoRecords,

    /// The file bytes are not valid UTF-8.
    #[error("file is not valid UTF-8 text: {0}")]
    Undecodable(String),

    /// The browser could not read the selected file.
    #[error("failed to read file: {0}")]
    Unreadable(String),
}

/// A key-value backend refused a read, write or remove.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

/// Errors raised by [`crate::roster::RosterStore`].
#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted snapshot could not be encoded or decoded.
    #[error("roster snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A roster must hold at least one record; use `clear` to empty it.
    #[error("cannot install an empty roster")]
    EmptyRoster,
}

/// Reasons a check-in could not be confirmed.
#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("no attendee selected")]
    NotSelected,

    #[error("select how the attendee heard about the event")]
    MissingSource,

    #[error("describe the other source")]
    MissingOtherText,

    #[error(transparent)]
    Roster(#[from] RosterError),
}
