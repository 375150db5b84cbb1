use common::checkin::CheckInFlow;
use common::config::RosterConfig;
use common::csv::{export_csv, parse_roster};
use common::error::{ParseError, RosterError};
use common::model::notice::Tone;
use common::model::source::Source;
use common::reset::ResetFlow;
use common::roster::{KeyValueStorage, MemoryStorage, Phase, RosterStore};
use common::search::filter;

const SAMPLE: &str = "First,Last,Email\nJane,Doe,jane@x.com\nJon,Roe,jon@x.com";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn import_check_in_export() {
    init_logging();
    let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
    store.import_text(SAMPLE).unwrap();
    assert_eq!(store.records().len(), 2);
    assert!(store.records().iter().all(|r| !r.checked_in));

    let mut flow = CheckInFlow::new();
    let jane = filter(store.records(), "jane")[0].clone();
    flow.select(&jane);
    flow.set_source(Source::Luma);
    let notice = flow.confirm(&mut store).unwrap();
    assert_eq!(notice.tone, Tone::Neutral);

    assert_eq!(
        store.export_csv(),
        "First Name,Last Name,Email,Source\nJane,Doe,jane@x.com,Luma\nJon,Roe,jon@x.com,\n"
    );
    assert_eq!(store.progress().checked_in, 1);
}

#[test]
fn roster_survives_a_reload() {
    init_logging();
    let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
    store.import_text(SAMPLE).unwrap();
    let mut flow = CheckInFlow::new();
    flow.select(&store.records()[1].clone());
    flow.set_source(Source::Other);
    flow.set_other_text("newsletter");
    flow.confirm(&mut store).unwrap();

    let mut reloaded = RosterStore::new(store.storage().clone(), &RosterConfig::default());
    assert_eq!(reloaded.load().unwrap(), Phase::Loaded);
    assert_eq!(reloaded.records()[1].source.as_deref(), Some("newsletter"));
}

#[test]
fn reset_returns_to_upload_phase() {
    init_logging();
    let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
    store.import_text(SAMPLE).unwrap();

    let mut reset = ResetFlow::new();
    reset.open();
    reset.confirm(&mut store).unwrap();

    assert!(store.records().is_empty());
    assert_eq!(store.phase(), Phase::Unloaded);
    assert_eq!(store.storage().get("eventAttendees").unwrap(), None);

    let mut reloaded = RosterStore::new(store.storage().clone(), &RosterConfig::default());
    assert_eq!(reloaded.load().unwrap(), Phase::Unloaded);
}

#[test]
fn bad_upload_does_not_replace_roster() {
    init_logging();
    let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
    store.import_text(SAMPLE).unwrap();
    let snapshot = store.storage().get("eventAttendees").unwrap();

    let err = store.import_text("name only\n,\n").unwrap_err();
    assert!(matches!(err, RosterError::Parse(ParseError::NoRecords)));
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.storage().get("eventAttendees").unwrap(), snapshot);
}

#[test]
fn exported_file_imports_back_unchanged() {
    init_logging();
    let mut store = RosterStore::new(MemoryStorage::new(), &RosterConfig::default());
    store
        .import_text("first,last,email\nA,One,a@x.com\nB,Two,b@x.com\nC,Three,c@x.com")
        .unwrap();
    for (email, source) in [("a@x.com", "Flyer"), ("b@x.com", "Instagram Ad"), ("c@x.com", "met at the door")] {
        store.update_by_email(email, |r| r.check_in(source)).unwrap();
    }

    let exported = export_csv(store.records());
    assert_eq!(parse_roster(&exported).unwrap(), store.records());
}
