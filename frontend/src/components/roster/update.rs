//! Update function for the check-in screen.
//!
//! Elm-style: receives the current `RosterComponent` state, the `Context`, and
//! a `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Restoring the saved roster on startup.
//! - Reading the uploaded file asynchronously and importing it. A later read
//!   that completes after an earlier one simply replaces it.
//! - Driving the check-in and reset flows from `common`.
//! - Exporting the roster as a CSV download.
//!
//! Every outcome the operator should see goes through `show_notice`.

use chrono::Utc;
use gloo_file::{futures::read_as_bytes, Blob};
use log::{debug, error, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::csv::export_file_name;
use common::error::{CheckInError, ParseError, RosterError};
use common::model::notice::Notice;
use common::roster::{Phase, RosterChange};

use super::helpers::{download_text, show_notice};
use super::messages::Msg;
use super::state::RosterComponent;

/// Central update function for the component.
pub fn update(component: &mut RosterComponent, ctx: &Context<RosterComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Restore => match component.store.load() {
            Ok(phase) => phase == Phase::Loaded,
            Err(err) => {
                warn!("Could not restore attendees: {}", err);
                show_notice(&Notice::restore_failed());
                false
            }
        },
        Msg::FileSelected(file) => {
            debug!("Reading {} ({} bytes)", file.name(), file.size());
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => link.send_message(Msg::FileLoaded(bytes)),
                    Err(err) => link.send_message(Msg::FileFailed(err.to_string())),
                }
            });
            false
        }
        Msg::FileLoaded(bytes) => match component.store.import_bytes(&bytes) {
            Ok(RosterChange::Replaced { count }) => {
                component.query.clear();
                component.check_in.cancel();
                component.reset.cancel();
                show_notice(&Notice::imported(count));
                true
            }
            Ok(_) => true,
            Err(err) => {
                match &err {
                    RosterError::Parse(ParseError::NoRecords) => warn!("Upload rejected: {}", err),
                    _ => error!("Error parsing CSV: {}", err),
                }
                show_notice(&Notice::roster_failed(&err));
                false
            }
        },
        Msg::FileFailed(reason) => {
            let err = ParseError::Unreadable(reason);
            error!("Error parsing CSV: {}", err);
            show_notice(&Notice::import_failed(&err));
            false
        }
        Msg::UpdateQuery(query) => {
            component.query = query;
            true
        }
        Msg::Select(attendee) => {
            component.check_in.select(&attendee);
            true
        }
        Msg::SetSource(source) => {
            component.check_in.set_source(source);
            true
        }
        Msg::SetOtherText(text) => {
            component.check_in.set_other_text(text);
            true
        }
        Msg::ConfirmCheckIn => match component.check_in.confirm(&mut component.store) {
            Ok(notice) => {
                show_notice(&notice);
                true
            }
            Err(CheckInError::Roster(err)) => {
                show_notice(&Notice::roster_failed(&err));
                true
            }
            // The button is disabled while the draft is incomplete.
            Err(err) => {
                debug!("Check-in not confirmed: {}", err);
                false
            }
        },
        Msg::CancelCheckIn => {
            component.check_in.cancel();
            true
        }
        Msg::Download => {
            let file_name = export_file_name(&component.export_file_prefix, Utc::now().date_naive());
            let csv = component.store.export_csv();
            if let Err(err) = download_text(&file_name, &csv, "text/csv") {
                error!("Download of {} failed: {:?}", file_name, err);
                show_notice(&Notice::download_failed());
            }
            false
        }
        Msg::OpenReset => {
            component.reset.open();
            true
        }
        Msg::CancelReset => {
            component.reset.cancel();
            true
        }
        Msg::ConfirmReset => {
            match component.reset.confirm(&mut component.store) {
                Ok(Some(notice)) => {
                    component.query.clear();
                    component.check_in.cancel();
                    show_notice(&notice);
                }
                Ok(None) => {}
                Err(err) => show_notice(&Notice::roster_failed(&err)),
            }
            true
        }
    }
}
