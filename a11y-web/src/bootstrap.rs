//! Page start-up: apply stored preferences and inject the controls once.

use crate::a11y::{DomPage, accessibility_css};
use crate::components::{AccessibilityControls, ScrollTopButton, controls};
use crate::controller::ControlsHandle;
use crate::dom;
use crate::storage::BrowserStorage;
use a11y_core::{PreferenceService, PreferenceStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// The preference service as wired in the browser.
pub type WebPreferenceService = PreferenceService<BrowserStorage, DomPage>;

/// Element ids used to find or create the injected markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsConfig {
    pub container_id: String,
    pub scroll_host_id: String,
    pub style_id: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            container_id: String::from("accessibility-controls"),
            scroll_host_id: String::from("back-to-top-host"),
            style_id: String::from("accessibility-styles"),
        }
    }
}

/// Result of one bootstrap pass.
pub struct Boot {
    pub service: Rc<WebPreferenceService>,
    /// `false` when the controls were already on the page.
    pub injected: bool,
}

/// Freshly created, already attached hosts for the two Yew apps.
pub struct MountPoints {
    pub controls: Element,
    pub scroll_host: Element,
}

thread_local! {
    static BOOTED: RefCell<Option<Rc<WebPreferenceService>>> = const { RefCell::new(None) };
}

/// Add the accessibility stylesheet to `<head>` unless it is already there.
///
/// # Errors
/// Returns an error if the `<style>` element cannot be created or appended.
pub fn ensure_stylesheet(doc: &Document, style_id: &str) -> Result<bool, JsValue> {
    if doc.get_element_by_id(style_id).is_some() {
        return Ok(false);
    }
    let style = doc.create_element("style")?;
    style.set_id(style_id);
    style.set_text_content(Some(accessibility_css()));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => doc
            .body()
            .ok_or_else(|| JsValue::from_str("document body unavailable"))?
            .append_child(&style)?,
    };
    Ok(true)
}

/// Create the controls container and the scroll-to-top host unless the
/// container already exists.
///
/// Both elements are built first and attached in one call, so a failure
/// never leaves a lone container that would block later injection.
///
/// # Errors
/// Returns an error if the body is missing or an element cannot be created or attached.
pub fn ensure_mount_points(
    doc: &Document,
    config: &ControlsConfig,
) -> Result<Option<MountPoints>, JsValue> {
    if doc.get_element_by_id(&config.container_id).is_some() {
        return Ok(None);
    }
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;

    let controls = doc.create_element("div")?;
    controls.set_id(&config.container_id);
    controls.set_attribute("role", "toolbar")?;
    controls.set_attribute("aria-label", "Accessibility")?;

    let scroll_host = doc.create_element("div")?;
    scroll_host.set_id(&config.scroll_host_id);

    body.append_with_node_2(&controls, &scroll_host)?;
    Ok(Some(MountPoints {
        controls,
        scroll_host,
    }))
}

fn controls_present(config: &ControlsConfig) -> bool {
    dom::document().is_some_and(|doc| doc.get_element_by_id(&config.container_id).is_some())
}

/// Load preferences, apply them and make sure the controls exist exactly once.
///
/// Safe to call repeatedly: while the container is on the page, later calls
/// hand back the service driving it and touch neither the page nor storage.
pub fn boot(config: &ControlsConfig) -> Boot {
    if controls_present(config) {
        let service = BOOTED.with(|cell| cell.borrow().clone()).unwrap_or_else(|| {
            Rc::new(PreferenceService::new(
                PreferenceStore::new(BrowserStorage::local()),
                DomPage,
            ))
        });
        return Boot {
            service,
            injected: false,
        };
    }

    let service = Rc::new(PreferenceService::new(
        PreferenceStore::new(BrowserStorage::local()),
        DomPage,
    ));
    service.apply();

    let Some(doc) = dom::document() else {
        return Boot {
            service,
            injected: false,
        };
    };
    if let Err(err) = ensure_stylesheet(&doc, &config.style_id) {
        log::warn!("accessibility stylesheet not added: {}", dom::js_error_message(&err));
    }
    let injected = match ensure_mount_points(&doc, config) {
        Ok(Some(mounts)) => {
            let handle: ControlsHandle = service.clone();
            yew::Renderer::<AccessibilityControls>::with_root_and_props(
                mounts.controls,
                controls::Props { controls: handle },
            )
            .render();
            yew::Renderer::<ScrollTopButton>::with_root(mounts.scroll_host).render();
            BOOTED.with(|cell| cell.replace(Some(service.clone())));
            true
        }
        Ok(None) => false,
        Err(err) => {
            log::warn!("accessibility controls not injected: {}", dom::js_error_message(&err));
            false
        }
    };
    Boot { service, injected }
}
