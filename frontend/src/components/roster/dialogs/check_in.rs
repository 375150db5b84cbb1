use common::model::source::Source;
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::roster::{Msg, RosterComponent};
use crate::tops_sheet::dialog_sheet::DialogSheet;

/// "How did you hear about this event?" dialog for the selected attendee.
/// The confirm button stays disabled until `CheckInFlow::can_confirm` holds.
pub fn check_in_dialog(component: &RosterComponent, link: &Scope<RosterComponent>) -> Html {
    let Some(draft) = component.check_in.draft() else {
        return html! {};
    };

    let options = Source::ALL.into_iter().map(|source| {
        html! {
            <label class="radio-option">
                <input
                    type="radio"
                    name="check-in-source"
                    value={source.label()}
                    checked={draft.source == Some(source)}
                    onchange={link.callback(move |_| Msg::SetSource(source))}
                />
                <span>{ source.label() }</span>
            </label>
        }
    });

    html! {
        <DialogSheet
            open={true}
            title={format!("Check in {}", draft.attendee.full_name())}
            on_dismiss={link.callback(|_| Msg::CancelCheckIn)}
        >
            <div class="check-in-form">
                <h3>{"How did you hear about this event?"}</h3>
                <div class="radio-group">
                    { for options }
                </div>
                if draft.source == Some(Source::Other) {
                    <label class="other-source">
                        <span>{"Please specify:"}</span>
                        <textarea
                            value={draft.other_text.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::SetOtherText(textarea.value())
                            })}
                        />
                    </label>
                }
                <div class="dialog-actions">
                    <button class="btn outline" onclick={link.callback(|_| Msg::CancelCheckIn)}>
                        {"Cancel"}
                    </button>
                    <button
                        class="btn primary"
                        disabled={!component.check_in.can_confirm()}
                        onclick={link.callback(|_| Msg::ConfirmCheckIn)}
                    >
                        {"Check In"}
                    </button>
                </div>
            </div>
        </DialogSheet>
    }
}
