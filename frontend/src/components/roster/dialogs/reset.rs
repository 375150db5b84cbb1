use yew::html::Scope;
use yew::prelude::*;

use crate::components::roster::{Msg, RosterComponent};
use crate::tops_sheet::dialog_sheet::DialogSheet;

pub fn reset_dialog(component: &RosterComponent, link: &Scope<RosterComponent>) -> Html {
    html! {
        <DialogSheet
            open={component.reset.is_confirming()}
            title="Are you sure?"
            on_dismiss={link.callback(|_| Msg::CancelReset)}
        >
            <p>
                {"Are you sure you want to reset the attendees list? This action cannot be undone."}
            </p>
            <div class="dialog-actions">
                <button class="btn outline" onclick={link.callback(|_| Msg::CancelReset)}>
                    {"Cancel"}
                </button>
                <button class="btn destructive" onclick={link.callback(|_| Msg::ConfirmReset)}>
                    {"Reset"}
                </button>
            </div>
        </DialogSheet>
    }
}
