use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Find an element by id, creating it under `parent` with `tag` when missing.
pub fn ensure_element(
    doc: &Document,
    parent: &Element,
    tag: &str,
    id: &str,
) -> Result<Element, JsValue> {
    if let Some(existing) = doc.get_element_by_id(id) {
        return Ok(existing);
    }
    let el = doc.create_element(tag)?;
    el.set_id(id);
    parent.append_child(&el)?;
    Ok(el)
}

/// Whether a modal dialog is currently mounted.
#[must_use]
pub fn dialog_open() -> bool {
    document()
        .and_then(|doc| doc.query_selector(".modal[role='dialog']").ok().flatten())
        .is_some()
}

/// Whether the document is currently presented fullscreen.
#[must_use]
pub fn fullscreen_active() -> bool {
    document().is_some_and(|doc| doc.fullscreen_element().is_some())
}

/// Ask the browser to present the whole document fullscreen.
///
/// The request may be refused or unsupported; that is logged and otherwise ignored.
pub fn request_fullscreen() {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return;
    };
    if let Err(err) = root.request_fullscreen() {
        log::debug!("fullscreen request refused: {}", js_error_message(&err));
    }
}

pub fn exit_fullscreen() {
    if let Some(doc) = document() {
        doc.exit_fullscreen();
    }
}
