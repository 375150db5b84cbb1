//! Utility functions for the check-in screen.
//!
//! - **User Feedback**: rendering a [`Notice`] as a temporary toast.
//! - **Download**: handing the exported CSV to the browser as a file.
//! - **Formatting**: attendee counts with thousands separators.

use js_sys::Array;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

use common::model::notice::{Notice, Tone};

const TOAST_MILLIS: u32 = 3000;

/// Displays a notice as a toast at the bottom of the screen.
///
/// The toast is a styled `div` appended to `<body>` that removes itself after
/// a few seconds. Destructive notices get a red background.
pub fn show_notice(notice: &Notice) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name("toast");
    let title = document.create_element("strong").ok();
    let description = document.create_element("div").ok();
    if let (Some(title), Some(description)) = (title, description) {
        title.set_text_content(Some(&notice.title));
        description.set_text_content(Some(&notice.description));
        toast.append_child(&title).ok();
        toast.append_child(&description).ok();
    }

    let html_toast: HtmlElement = toast.unchecked_into();
    let background = match notice.tone {
        Tone::Neutral => "rgba(0, 0, 0, 0.85)",
        Tone::Destructive => "#d32f2f",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Offers `contents` as a file download named `file_name`.
///
/// Builds a `Blob`, points a temporary anchor at its object URL, clicks it and
/// revokes the URL.
pub fn download_text(file_name: &str, contents: &str, mime: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

/// `1234` -> `"1,234"`
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
