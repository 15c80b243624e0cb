use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn focus_element(id: &str) {
    if let Some(element) = element_by_id(id) {
        if element.focus().is_err() {
            log::warn!("Could not focus #{}", id);
        }
    }
}

/// Stops the page behind a modal from scrolling.
pub fn set_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}
