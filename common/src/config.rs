use serde::{Deserialize, Serialize};

/// Storage key used by earlier releases of the check-in page. Kept so rosters
/// saved in a browser before an upgrade still load.
pub const DEFAULT_STORAGE_KEY: &str = "eventAttendees";

pub const DEFAULT_EXPORT_FILE_PREFIX: &str = "event-attendees";

/// Settings shared by the roster store and the export routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Key the roster snapshot is written under.
    pub storage_key: String,
    /// Export files are named `<prefix>-YYYY-MM-DD.csv`.
    pub export_file_prefix: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_prefix: DEFAULT_EXPORT_FILE_PREFIX.to_string(),
        }
    }
}
