use crate::constants::CLICK_EVENT;
use crate::error::ToggleError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element(document: &web::Document, element_id: &str) -> Result<web::Element, ToggleError> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| ToggleError::missing(element_id))
}

/// Attach a click handler to `#element_id`. The closure lives as long as the page.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), ToggleError> {
    let el = element(document, element_id)?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback(CLICK_EVENT, closure.as_ref().unchecked_ref())
        .map_err(|e| ToggleError::Listener {
            id: element_id.to_string(),
            reason: format!("{:?}", e),
        })?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document has parsed, or right away if it already has.
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let closure = Closure::once(f);
    if let Err(e) = document.add_event_listener_with_callback(
        crate::constants::DOM_READY_EVENT,
        closure.as_ref().unchecked_ref(),
    ) {
        log::error!("[dom] failed to wait for DOMContentLoaded: {:?}", e);
    }
    closure.forget();
}
