use serde::{Deserialize, Serialize};

/// One row of the roster.
///
/// The e-mail is the identity key: the store looks records up by exact,
/// case-sensitive e-mail and import keeps at most one record per address.
///
/// Serialized with camelCase keys, which is the layout of the snapshot kept in
/// browser storage. `source` is omitted from the snapshot while it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Set together with `source` by [`AttendeeRecord::check_in`].
    #[serde(default)]
    pub checked_in: bool,
    /// How the attendee heard about the event; only captured at check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl AttendeeRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            checked_in: false,
            source: None,
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Marks the attendee as present and records the attribution.
    pub fn check_in(&mut self, source: impl Into<String>) {
        self.checked_in = true;
        self.source = Some(source.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_camel_case_and_omits_missing_source() {
        let record = AttendeeRecord::new("Jane", "Doe", "jane@x.com");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"firstName":"Jane","lastName":"Doe","email":"jane@x.com","checkedIn":false}"#
        );
    }

    #[test]
    fn check_in_sets_flag_and_source_together() {
        let mut record = AttendeeRecord::new("Jane", "Doe", "jane@x.com");
        record.check_in("Luma");
        assert!(record.checked_in);
        assert_eq!(record.source.as_deref(), Some("Luma"));
        assert_eq!(record.full_name(), "Jane Doe");
    }
}
