use a11y_core::{ScrollTopTracker, ScrollTopVisibility};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Storage, Window};

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

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current vertical scroll offset of the window in CSS pixels.
#[must_use]
pub fn scroll_offset_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the window back to the top. Fire-and-forget.
pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// A `scroll` listener on the window that feeds a [`ScrollTopTracker`].
///
/// `on_change` runs synchronously inside the scroll event whenever the
/// visibility flips. The listener is removed when this value is dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Attach the listener and evaluate the current offset once.
    ///
    /// Returns `None` outside a browser or if the listener is rejected.
    pub fn attach(mut on_change: impl FnMut(ScrollTopVisibility) + 'static) -> Option<Self> {
        let window = window()?;
        let mut tracker = ScrollTopTracker::new();
        if let Some(initial) = tracker.observe(scroll_offset_y()) {
            on_change(initial);
        }
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(next) = tracker.observe(scroll_offset_y()) {
                on_change(next);
            }
        });
        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            log::warn!("scroll listener rejected: {}", js_error_message(&err));
            return None;
        }
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
