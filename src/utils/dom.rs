//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every helper degrades to a no-op (or `None`) when the element or API it
//! needs is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::core::{FocusTarget, FragmentStore};
use crate::models::Rect;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Milliseconds from the high-resolution clock.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Viewport bounding box of an element.
pub fn bounding_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Focus an input by id and select its whole text.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_and_select(id: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.get_element_by_id(id)
        && let Ok(input) = element.dyn_into::<HtmlInputElement>()
    {
        input.select();
        input.focus().is_ok()
    } else {
        false
    }
}

/// Classify the focused element.
pub fn focus_target(rename_input_id: &str) -> FocusTarget {
    let Some(active) = document().and_then(|d| d.active_element()) else {
        return FocusTarget::Page;
    };
    match active.tag_name().as_str() {
        "INPUT" | "TEXTAREA" if active.id() == rename_input_id => FocusTarget::RenameInput,
        "INPUT" | "TEXTAREA" => FocusTarget::OtherText,
        _ => FocusTarget::Page,
    }
}

/// Scroll the file row carrying `data-path == path` to the viewport center.
pub fn scroll_row_into_view(path: &str) {
    let Some(document) = document() else { return };
    let Ok(rows) = document.query_selector_all("[data-path]") else {
        return;
    };
    for i in 0..rows.length() {
        let Some(element) = rows.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if element.get_attribute("data-path").as_deref() == Some(path) {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_block(web_sys::ScrollLogicalPosition::Center);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&opts);
            return;
        }
    }
}

/// Enter fullscreen for the element with `id`, or leave it if active.
pub fn toggle_fullscreen(id: &str) {
    let Some(document) = document() else { return };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Some(element) = document.get_element_by_id(id) {
        let _ = element.request_fullscreen();
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash is given without the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Drop the hash from the URL without adding to browser history.
pub fn clear_hash() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let location = window.location();
        let url = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

/// [`FragmentStore`] backed by `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFragment;

impl FragmentStore for BrowserFragment {
    fn read(&self) -> String {
        get_hash()
    }

    fn write(&self, encoded: &str) {
        set_hash(encoded);
    }

    fn clear(&self) {
        clear_hash();
    }
}
