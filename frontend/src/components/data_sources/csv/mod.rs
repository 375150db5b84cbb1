//! Upload panel for the attendee CSV.
//!
//! Accepts a file either from the hidden picker behind the drop zone or from a
//! drag and drop onto it, and hands the `web_sys::File` to the parent. Reading
//! and parsing happen in the roster component.

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CsvUploadProps {
    pub on_file: Callback<File>,
}

pub enum Msg {
    DragOver,
    DragLeave,
    Picked(Option<File>),
}

pub struct CsvUploadComponent {
    dragging: bool,
}

impl Component for CsvUploadComponent {
    type Message = Msg;
    type Properties = CsvUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CsvUploadComponent { dragging: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DragOver => {
                let changed = !self.dragging;
                self.dragging = true;
                changed
            }
            Msg::DragLeave => {
                self.dragging = false;
                true
            }
            Msg::Picked(file) => {
                self.dragging = false;
                if let Some(file) = file {
                    ctx.props().on_file.emit(file);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let onchange = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            // Allow picking the same file again after a reset.
            input.set_value("");
            Msg::Picked(file)
        });
        let ondragover = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::DragOver
        });
        let ondragleave = link.callback(|_: DragEvent| Msg::DragLeave);
        let ondrop = link.callback(|e: DragEvent| {
            e.prevent_default();
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            Msg::Picked(file)
        });

        let zone_class = classes!("drop-zone", self.dragging.then_some("dragging"));

        html! {
            <div class="upload-screen">
                <h2>{"Upload Attendee List"}</h2>
                <p class="muted">
                    {"Upload a CSV file with columns for first name, last name, and email address."}
                </p>
                <label class={zone_class} {ondragover} {ondragleave} {ondrop}>
                    <i class="material-icons upload-icon">{"upload_file"}</i>
                    <span class="drop-title">{"Click to upload CSV"}</span>
                    <span class="muted">{"or drag and drop"}</span>
                    <input type="file" accept=".csv" class="hidden" {onchange} />
                </label>
            </div>
        }
    }
}
