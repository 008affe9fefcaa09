//! Page Commands
//!
//! Document-level side effects: reload, scroll lock, global key handling.
//! Missing window/document/body is a silent no-op.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::describe_js_error;

/// Full page reload (error-state recovery)
pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[PAGE] Reload failed: {}", describe_js_error(&e));
        }
    }
}

/// Suspend or restore scrolling of the page behind the overlay
pub fn set_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body());

    if let Some(body) = body {
        let overflow = if locked { "hidden" } else { "auto" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            log::warn!("[PAGE] Could not set overflow: {}", describe_js_error(&e));
        }
    }
}

/// Bind a document-level keydown handler for the page lifetime
pub fn bind_global_keydown<F>(on_keydown: F)
where
    F: Fn(web_sys::KeyboardEvent) + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        on_keydown(ev);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if let Err(e) = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref()) {
                log::warn!("[PAGE] Could not bind keydown: {}", describe_js_error(&e));
            }
        }
    }
    on_keydown.forget();
}
