use std::collections::HashMap;

use log::debug;

use crate::error::ParseError;
use crate::model::attendee::AttendeeRecord;

/// Header detection tokens, matched case-insensitively against line 1 only.
const HEADER_TOKENS: [&str; 2] = ["first", "email"];

/// Decodes raw file bytes as UTF-8.
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::Undecodable(e.to_string()))
}

/// Parses attendee rows out of comma-delimited text.
///
/// - Line 1 is skipped when it contains `first` or `email` in any case.
/// - Each remaining line loses its trailing `\r`; blank lines and lines with
///   fewer than three fields are skipped without error.
/// - Fields 0, 1 and 2 become first name, last name and e-mail, each trimmed.
/// - A non-empty fourth field is a source written by a previous export: the
///   record comes back checked in with that source, kept exactly as written.
///   Further fields are ignored.
/// - A row repeating an earlier e-mail replaces that record in place, so the
///   result holds one record per address in order of first appearance.
///
/// Returns [`ParseError::NoRecords`] when nothing usable was found.
pub fn parse_roster(text: &str) -> Result<Vec<AttendeeRecord>, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = match lines.first() {
        Some(first) if is_header(first) => 1,
        _ => 0,
    };

    let mut records: Vec<AttendeeRecord> = Vec::new();
    let mut by_email: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (lineno, raw) in lines.iter().enumerate().skip(start) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            debug!("parse_roster: skipping line {} ({} fields)", lineno + 1, fields.len());
            skipped += 1;
            continue;
        }

        let mut record = AttendeeRecord::new(fields[0].trim(), fields[1].trim(), fields[2].trim());
        if let Some(source) = fields.get(3).copied().filter(|f| !f.is_empty()) {
            record.check_in(source);
        }
        match by_email.get(&record.email) {
            Some(&idx) => {
                debug!("parse_roster: line {} repeats {}, keeping the later row", lineno + 1, record.email);
                records[idx] = record;
            }
            None => {
                by_email.insert(record.email.clone(), records.len());
                records.push(record);
            }
        }
    }

    debug!("parse_roster: {} records, {} short lines skipped", records.len(), skipped);

    if records.is_empty() {
        return Err(ParseError::NoRecords);
    }
    Ok(records)
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_TOKENS.iter().any(|token| lower.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_excluded() {
        let records = parse_roster("First,Last,Email\nJane,Doe,jane@x.com\nJon,Roe,jon@x.com").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], AttendeeRecord::new("Jane", "Doe", "jane@x.com"));
        assert!(records.iter().all(|r| !r.checked_in && r.source.is_none()));
    }

    #[test]
    fn header_detection_is_case_insensitive() {
        let records = parse_roster("NAME,SURNAME,EMAIL ADDRESS\nJane,Doe,jane@x.com").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn first_line_without_tokens_is_data() {
        let records = parse_roster("Jane,Doe,jane@x.com\nJon,Roe,jon@x.com\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_name, "Jane");
    }

    #[test]
    fn a_data_row_mentioning_email_is_taken_as_header() {
        let records = parse_roster("Jane,Doe,jane@email.com\nJon,Roe,jon@x.com").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "jon@x.com");
    }

    #[test]
    fn short_lines_are_skipped() {
        let records = parse_roster("first,last,email\nJane,Doe\n\nJon,Roe,jon@x.com").unwrap();
        assert_eq!(records, vec![AttendeeRecord::new("Jon", "Roe", "jon@x.com")]);
    }

    #[test]
    fn exported_source_column_restores_check_in() {
        let text = "First Name,Last Name,Email,Source\nJane,Doe,jane@x.com,Luma\nJon,Roe,jon@x.com,\n";
        let records = parse_roster(text).unwrap();
        assert!(records[0].checked_in);
        assert_eq!(records[0].source.as_deref(), Some("Luma"));
        assert!(!records[1].checked_in);
        assert_eq!(records[1].source, None);
    }

    #[test]
    fn only_short_lines_is_an_error() {
        assert_eq!(parse_roster("Jane,Doe\nJon"), Err(ParseError::NoRecords));
        assert_eq!(parse_roster(""), Err(ParseError::NoRecords));
        assert_eq!(parse_roster("First,Last,Email\n"), Err(ParseError::NoRecords));
    }

    #[test]
    fn fields_and_crlf_lines_are_trimmed() {
        let records = parse_roster("First,Last,Email\r\n  Jane , Doe ,  jane@x.com \r\n").unwrap();
        assert_eq!(records[0], AttendeeRecord::new("Jane", "Doe", "jane@x.com"));
    }

    #[test]
    fn later_duplicate_row_wins_in_place() {
        let text = "a@x.com,A,a@x.com\nAnn,Old,ann@x.com\nBo,B,bo@x.com\nAnn,New,ann@x.com";
        let records = parse_roster(text).unwrap();
        let emails: Vec<&str> = records.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, ["a@x.com", "ann@x.com", "bo@x.com"]);
        assert_eq!(records[1].last_name, "New");
    }

    #[test]
    fn source_column_is_not_trimmed() {
        let records = parse_roster("Jane,Doe,jane@x.com,   \r\nJon,Roe,jon@x.com,  padded \n").unwrap();
        assert!(records[0].checked_in);
        assert_eq!(records[0].source.as_deref(), Some("   "));
        assert_eq!(records[1].source.as_deref(), Some("  padded "));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(matches!(decode(&[0x66, 0xff, 0xfe]), Err(ParseError::Undecodable(_))));
        assert_eq!(decode(b"Jane,Doe,jane@x.com"), Ok("Jane,Doe,jane@x.com"));
    }
}
