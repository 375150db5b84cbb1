use common::model::attendee::AttendeeRecord;
use common::model::source::Source;

#[derive(Clone)]
pub enum Msg {
    Restore,
    FileSelected(web_sys::File),
    FileLoaded(Vec<u8>),
    FileFailed(String),
    UpdateQuery(String),
    Select(AttendeeRecord),
    SetSource(Source),
    SetOtherText(String),
    ConfirmCheckIn,
    CancelCheckIn,
    Download,
    OpenReset,
    CancelReset,
    ConfirmReset,
}
