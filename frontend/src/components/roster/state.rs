//! Component state for the check-in screen.

use common::checkin::CheckInFlow;
use common::config::RosterConfig;
use common::reset::ResetFlow;
use common::roster::RosterStore;

use crate::storage::BrowserStorage;

/// Main state container for the `RosterComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct RosterComponent {
    /// Attendees, persisted to `localStorage` on every change.
    pub store: RosterStore<BrowserStorage>,

    /// Current search box contents.
    pub query: String,

    /// Check-in dialog state.
    pub check_in: CheckInFlow,

    /// Reset confirmation prompt state.
    pub reset: ResetFlow,

    /// Export file name prefix, from the component props.
    pub export_file_prefix: String,

    /// Guard so the saved roster is restored only once.
    pub restored: bool,
}

impl RosterComponent {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            store: RosterStore::new(BrowserStorage::open(), config),
            query: String::new(),
            check_in: CheckInFlow::new(),
            reset: ResetFlow::new(),
            export_file_prefix: config.export_file_prefix.clone(),
            restored: false,
        }
    }
}
