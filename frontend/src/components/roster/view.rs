//! View rendering for the check-in screen.
//!
//! Two layouts, picked by the roster phase: the upload panel while no roster
//! is loaded, and the searchable attendee list once one is. The check-in and
//! reset dialogs are rendered on top of the list.

use common::model::attendee::AttendeeRecord;
use common::roster::Phase;
use common::search::filter;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::check_in::check_in_dialog;
use super::dialogs::reset::reset_dialog;
use super::helpers::format_count;
use super::messages::Msg;
use super::state::RosterComponent;
use crate::components::data_sources::csv::CsvUploadComponent;

/// Main view function: header, the active screen, and the check-in dialog.
pub fn view(component: &RosterComponent, ctx: &Context<RosterComponent>) -> Html {
    let link = ctx.link();
    let phase = component.store.phase();

    html! {
        <div class="checkin-root">
            { build_header(phase, link) }
            {
                match phase {
                    Phase::Unloaded => html! {
                        <CsvUploadComponent on_file={link.callback(Msg::FileSelected)} />
                    },
                    Phase::Loaded => build_list_screen(component, link),
                }
            }
            { check_in_dialog(component, link) }
        </div>
    }
}

fn build_header(phase: Phase, link: &Scope<RosterComponent>) -> Html {
    html! {
        <header class="checkin-header">
            <h1>{"Event Check-In"}</h1>
            if phase == Phase::Loaded {
                <button class="btn outline" onclick={link.callback(|_| Msg::Download)}>
                    <i class="material-icons">{"download"}</i>
                    <span>{"Download CSV"}</span>
                </button>
            }
        </header>
    }
}

/// Search box, progress, the filtered list and the reset control.
fn build_list_screen(component: &RosterComponent, link: &Scope<RosterComponent>) -> Html {
    let visible = filter(component.store.records(), &component.query);

    html! {
        <div class="list-screen">
            <div class="search">
                <i class="material-icons search-icon">{"search"}</i>
                <input
                    type="search"
                    placeholder="Search attendees..."
                    value={component.query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateQuery(input.value())
                    })}
                />
            </div>
            { build_progress(component) }
            <div class="attendee-list">
                if visible.is_empty() {
                    <div class="empty-state">{"No attendees found matching your search"}</div>
                } else {
                    { for visible.into_iter().map(|attendee| attendee_row(attendee, link)) }
                }
            </div>
            <button class="btn destructive" onclick={link.callback(|_| Msg::OpenReset)}>
                {"Reset Attendees"}
            </button>
            { reset_dialog(component, link) }
        </div>
    }
}

fn build_progress(component: &RosterComponent) -> Html {
    let progress = component.store.progress();
    let width = format!("width: {:.2}%;", progress.percentage());

    html! {
        <div class="progress">
            <div class="progress-labels">
                <span class="muted">
                    { format!(
                        "{} of {} checked in",
                        format_count(progress.checked_in),
                        format_count(progress.total)
                    ) }
                </span>
                <span class="progress-percent">{ format!("{}%", progress.rounded_percentage()) }</span>
            </div>
            <div class="progress-track">
                <div class="progress-bar" style={width} />
            </div>
        </div>
    }
}

fn attendee_row(attendee: &AttendeeRecord, link: &Scope<RosterComponent>) -> Html {
    let onclick = {
        let attendee = attendee.clone();
        link.callback(move |_| Msg::Select(attendee.clone()))
    };
    let icon = if attendee.checked_in {
        "check_circle"
    } else {
        "radio_button_unchecked"
    };

    html! {
        <div
            key={attendee.email.clone()}
            class={classes!("attendee-row", attendee.checked_in.then_some("checked-in"))}
            {onclick}
        >
            <i class="material-icons status-icon">{icon}</i>
            <div class="attendee-details">
                <div class="attendee-name">{ attendee.full_name() }</div>
                <div class="muted">{ attendee.email.clone() }</div>
                if let Some(source) = &attendee.source {
                    <div class="attendee-source">{ format!("Source: {}", source) }</div>
                }
            </div>
        </div>
    }
}
