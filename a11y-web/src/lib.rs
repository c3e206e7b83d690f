#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod bootstrap;
pub mod components;
pub mod controller;
pub mod dom;
pub mod storage;

pub use bootstrap::{Boot, ControlsConfig, WebPreferenceService, boot};
pub use controller::{ControlsHandle, PreferenceControls};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }));

    let Some(doc) = dom::document() else {
        return;
    };
    // Wait for the body when the module runs from <head>
    if doc.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(|| {
            let _ = boot(&ControlsConfig::default());
        });
        if let Err(err) =
            doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            dom::console_error(&dom::js_error_message(&err));
        }
    } else {
        let _ = boot(&ControlsConfig::default());
    }
}
