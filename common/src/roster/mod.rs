//! The roster store: the ordered attendee list plus its persisted snapshot.
//!
//! Every mutation follows the same sequence: build the new roster, write it to
//! storage, and only then swap it into memory. If the write fails the caller
//! gets the error and neither memory nor storage has changed, so the view never
//! observes a half-applied update.
//!
//! Mutations return a [`RosterChange`] describing what happened; the view
//! re-renders on anything other than [`RosterChange::Unchanged`].

use log::{info, warn};

use crate::config::RosterConfig;
use crate::csv;
use crate::error::{Result, RosterError};
use crate::model::attendee::AttendeeRecord;
use crate::model::progress::Progress;

mod storage;

pub use storage::{KeyValueStorage, MemoryStorage};

/// Lifecycle of the page: no roster (upload screen) or a roster (list screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unloaded,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    /// A new roster of `count` records replaced the previous one.
    Replaced { count: usize },
    /// The record at `index` was rewritten.
    Updated { index: usize },
    /// Nothing matched; memory and storage are untouched.
    Unchanged,
    Cleared,
}

pub struct RosterStore<S> {
    storage: S,
    storage_key: String,
    records: Vec<AttendeeRecord>,
}

impl<S: KeyValueStorage> RosterStore<S> {
    /// Creates an empty, unloaded store. Call [`RosterStore::load`] to pick up
    /// a previously saved roster.
    pub fn new(storage: S, config: &RosterConfig) -> Self {
        Self {
            storage,
            storage_key: config.storage_key.clone(),
            records: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.records.is_empty() {
            Phase::Unloaded
        } else {
            Phase::Loaded
        }
    }

    /// Records in import order.
    pub fn records(&self) -> &[AttendeeRecord] {
        &self.records
    }

    pub fn find_by_email(&self, email: &str) -> Option<&AttendeeRecord> {
        self.records.iter().find(|r| r.email == email)
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.records)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted snapshot, if any, into memory.
    ///
    /// A missing key or an empty array leaves the store unloaded. A snapshot
    /// that does not decode is reported and also leaves the store unloaded;
    /// it stays in storage until the next import overwrites it.
    pub fn load(&mut self) -> Result<Phase> {
        let Some(snapshot) = self.storage.get(&self.storage_key)? else {
            return Ok(Phase::Unloaded);
        };
        let records: Vec<AttendeeRecord> = serde_json::from_str(&snapshot).map_err(|e| {
            warn!("Discarding unreadable roster snapshot under '{}': {}", self.storage_key, e);
            e
        })?;
        info!("Restored {} attendees from storage", records.len());
        self.records = records;
        Ok(self.phase())
    }

    /// Installs a freshly imported roster in place of the current one.
    pub fn replace(&mut self, records: Vec<AttendeeRecord>) -> Result<RosterChange> {
        if records.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        self.persist(&records)?;
        let count = records.len();
        self.records = records;
        info!("Roster replaced with {} attendees", count);
        Ok(RosterChange::Replaced { count })
    }

    /// Parses `text` and, only if it yields records, replaces the roster.
    pub fn import_text(&mut self, text: &str) -> Result<RosterChange> {
        let records = csv::parse_roster(text)?;
        self.replace(records)
    }

    /// Same as [`RosterStore::import_text`] for raw file bytes.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<RosterChange> {
        let text = csv::decode(bytes)?;
        self.import_text(text)
    }

    /// Applies `mutation` to the record whose e-mail equals `email` exactly.
    /// An unknown e-mail is not an error.
    pub fn update_by_email<F>(&mut self, email: &str, mutation: F) -> Result<RosterChange>
    where
        F: FnOnce(&mut AttendeeRecord),
    {
        let Some(index) = self.records.iter().position(|r| r.email == email) else {
            return Ok(RosterChange::Unchanged);
        };

        let mut updated = self.records.clone();
        mutation(&mut updated[index]);
        if updated[index] == self.records[index] {
            return Ok(RosterChange::Unchanged);
        }
        self.persist(&updated)?;
        self.records = updated;
        Ok(RosterChange::Updated { index })
    }

    /// Empties the roster and deletes the persisted snapshot.
    pub fn clear(&mut self) -> Result<RosterChange> {
        self.storage.remove(&self.storage_key)?;
        self.records.clear();
        info!("Roster cleared");
        Ok(RosterChange::Cleared)
    }

    /// The CSV export of the current roster.
    pub fn export_csv(&self) -> String {
        csv::export_csv(&self.records)
    }

    fn persist(&mut self, records: &[AttendeeRecord]) -> Result<()> {
        // Empty rosters are never written; `clear` removes the key instead.
        if records.is_empty() {
            return Ok(());
        }
        let snapshot = serde_json::to_string(records)?;
        self.storage.set(&self.storage_key, &snapshot).map_err(|e| {
            warn!("Failed to persist roster: {}", e);
            RosterError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, StorageError};

    const SAMPLE: &str = "First,Last,Email\nJane,Doe,jane@x.com\nJon,Roe,jon@x.com";

    fn loaded_store() -> RosterStore<MemoryStorage> {
        let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
        store.import_text(SAMPLE).unwrap();
        store
    }

    /// Storage that accepts reads but refuses writes.
    #[derive(Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError("quota exceeded".into()))
        }

        fn remove(&mut self, _key: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError("read only".into()))
        }
    }

    #[test]
    fn new_store_is_unloaded() {
        let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
        assert_eq!(store.load().unwrap(), Phase::Unloaded);
        assert!(store.records().is_empty());
    }

    #[test]
    fn replace_persists_and_loads_back() {
        let store = loaded_store();
        assert_eq!(store.phase(), Phase::Loaded);

        let mut reopened = RosterStore::new(store.storage().clone(), &RosterConfig::default());
        assert_eq!(reopened.load().unwrap(), Phase::Loaded);
        assert_eq!(reopened.records(), store.records());
    }

    #[test]
    fn second_import_replaces_previous_roster() {
        let mut store = loaded_store();
        store
            .update_by_email("jane@x.com", |r| r.check_in("Luma"))
            .unwrap();

        let change = store.import_text("Ada,Lovelace,ada@x.com").unwrap();
        assert_eq!(change, RosterChange::Replaced { count: 1 });
        assert_eq!(store.records(), [AttendeeRecord::new("Ada", "Lovelace", "ada@x.com")]);

        let mut reopened = RosterStore::new(store.storage().clone(), &RosterConfig::default());
        reopened.load().unwrap();
        assert_eq!(reopened.records(), store.records());
        assert!(reopened.find_by_email("jane@x.com").is_none());
    }

    #[test]
    fn failed_import_keeps_current_roster() {
        let mut store = loaded_store();
        let before = store.records().to_vec();
        let err = store.import_text("nobody here").unwrap_err();
        assert!(matches!(err, RosterError::Parse(ParseError::NoRecords)));
        assert_eq!(store.records(), before.as_slice());
        assert_eq!(store.phase(), Phase::Loaded);
    }

    #[test]
    fn undecodable_bytes_keep_current_roster() {
        let mut store = loaded_store();
        let err = store.import_bytes(&[0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, RosterError::Parse(ParseError::Undecodable(_))));
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn replacing_with_nothing_is_rejected() {
        let mut store = loaded_store();
        assert!(matches!(store.replace(Vec::new()), Err(RosterError::EmptyRoster)));
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn update_touches_only_the_matching_record() {
        let mut store = loaded_store();
        let change = store
            .update_by_email("jon@x.com", |r| r.check_in("Flyer"))
            .unwrap();
        assert_eq!(change, RosterChange::Updated { index: 1 });
        assert!(!store.records()[0].checked_in);
        assert_eq!(store.records()[1].source.as_deref(), Some("Flyer"));

        let snapshot = store.storage().get("eventAttendees").unwrap().unwrap();
        assert!(snapshot.contains(r#""source":"Flyer""#));
    }

    #[test]
    fn update_matches_email_case_sensitively() {
        let mut store = loaded_store();
        let change = store
            .update_by_email("JANE@x.com", |r| r.check_in("Luma"))
            .unwrap();
        assert_eq!(change, RosterChange::Unchanged);
        assert!(store.records().iter().all(|r| !r.checked_in));
    }

    #[test]
    fn clear_removes_snapshot() {
        let mut store = loaded_store();
        assert_eq!(store.clear().unwrap(), RosterChange::Cleared);
        assert_eq!(store.phase(), Phase::Unloaded);
        assert!(!store.storage().contains_key("eventAttendees"));
    }

    #[test]
    fn corrupt_snapshot_leaves_store_unloaded() {
        let mut storage = MemoryStorage::new();
        storage.set("eventAttendees", "{not json").unwrap();
        let mut store = RosterStore::new(storage, &RosterConfig::default());
        assert!(matches!(store.load(), Err(RosterError::Snapshot(_))));
        assert_eq!(store.phase(), Phase::Unloaded);
    }

    #[test]
    fn empty_snapshot_loads_as_unloaded() {
        let mut storage = MemoryStorage::new();
        storage.set("eventAttendees", "[]").unwrap();
        let mut store = RosterStore::new(storage, &RosterConfig::default());
        assert_eq!(store.load().unwrap(), Phase::Unloaded);
    }

    #[test]
    fn failed_write_changes_nothing() {
        let mut store = RosterStore::new(ReadOnlyStorage::default(), &RosterConfig::default());
        assert!(matches!(store.import_text(SAMPLE), Err(RosterError::Storage(_))));
        assert_eq!(store.phase(), Phase::Unloaded);
    }

    #[test]
    fn custom_storage_key_is_honoured() {
        let config = RosterConfig {
            storage_key: "gala".into(),
            ..RosterConfig::default()
        };
        let mut store = RosterStore::new(MemoryStorage::new(), &config);
        store.import_text(SAMPLE).unwrap();
        assert!(store.storage().contains_key("gala"));
        assert!(!store.storage().contains_key("eventAttendees"));
    }
}
