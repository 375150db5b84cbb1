//! Plain comma-delimited attendee files.
//!
//! The format is deliberately minimal: fields are split on every comma and
//! there is no quoting, so a comma inside a name or source cannot survive an
//! export/import round trip. Rows are split on `\n` the same way, so a line
//! break inside a field would start a new row; the check-in dialog folds line
//! breaks in free-text sources into spaces before they reach the roster. Import reads `first,last,email[,...]` rows with an
//! optional header; export writes `First Name,Last Name,Email,Source`.

mod export;
mod import;

pub use export::{export_csv, export_file_name, EXPORT_HEADER};
pub use import::{decode, parse_roster};
