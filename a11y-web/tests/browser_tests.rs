#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use a11y_core::ScrollTopVisibility;
use a11y_core::constants::{HIGH_CONTRAST_CLASS, STORAGE_KEY};
use a11y_web::bootstrap::ensure_mount_points;
use a11y_web::dom::{self, ScrollListener};
use a11y_web::storage::BrowserStorage;
use a11y_web::{ControlsConfig, a11y, boot};
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset_page(config: &ControlsConfig) {
    let doc = dom::document().expect("document");
    for id in [&config.container_id, &config.scroll_host_id, &config.style_id] {
        if let Some(el) = doc.get_element_by_id(id) {
            el.remove();
        }
    }
    let root: HtmlElement = doc
        .document_element()
        .expect("root")
        .dyn_into()
        .expect("html element");
    let _ = root.class_list().remove_1(HIGH_CONTRAST_CLASS);
    let _ = root.style().remove_property("font-size");
    dom::local_storage()
        .expect("storage")
        .remove_item(STORAGE_KEY)
        .expect("clear record");
}

async fn sleep_ms(duration_ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration_ms)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

/// Let the Yew scheduler flush pending renders.
async fn settle() {
    sleep_ms(0).await;
}

fn button(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} present"))
        .dyn_into()
        .expect("button element")
}

fn stored_record() -> Option<String> {
    dom::local_storage()
        .expect("storage")
        .get_item(STORAGE_KEY)
        .expect("read")
}

fn dispatch_scroll() {
    dom::window()
        .expect("window")
        .dispatch_event(&Event::new("scroll").expect("event"))
        .expect("dispatch");
}

fn root_font_size() -> String {
    let root: HtmlElement = dom::document()
        .and_then(|doc| doc.document_element())
        .expect("root")
        .dyn_into()
        .expect("html element");
    root.style().get_property_value("font-size").expect("font-size")
}

fn contrast_button() -> HtmlElement {
    button("#accessibility-controls button.contrast-btn")
}

#[wasm_bindgen_test]
async fn fresh_page_boots_with_defaults() {
    let config = ControlsConfig::default();
    reset_page(&config);

    assert!(BrowserStorage::local().is_available());
    let booted = boot(&config);
    assert!(booted.injected);
    settle().await;
    assert_eq!(root_font_size(), "100%");
    assert!(!a11y::high_contrast_active());
    assert_eq!(contrast_button().text_content().as_deref(), Some("Contrast: OFF"));
    assert!(
        dom::local_storage()
            .expect("storage")
            .get_item(STORAGE_KEY)
            .expect("read")
            .is_none()
    );
}

#[wasm_bindgen_test]
async fn stored_record_is_applied_on_boot() {
    let config = ControlsConfig::default();
    reset_page(&config);
    dom::local_storage()
        .expect("storage")
        .set_item(STORAGE_KEY, r#"{"fontSize":150,"highContrastEnabled":true}"#)
        .expect("seed record");

    boot(&config);
    settle().await;
    assert_eq!(root_font_size(), "150%");
    assert!(a11y::high_contrast_active());
    let button = contrast_button();
    assert_eq!(button.text_content().as_deref(), Some("Contrast: ON"));
    assert_eq!(
        button.style().get_property_value("font-weight").expect("weight"),
        "bold"
    );
}

#[wasm_bindgen_test]
async fn repeated_boot_injects_controls_once() {
    let config = ControlsConfig::default();
    reset_page(&config);

    let first = boot(&config);
    assert!(first.injected);
    let second = boot(&config);
    assert!(!second.injected);
    assert!(Rc::ptr_eq(&first.service, &second.service));
    settle().await;
    let doc = dom::document().expect("document");
    let containers = doc
        .query_selector_all("#accessibility-controls")
        .expect("query containers");
    assert_eq!(containers.length(), 1);
    let buttons = doc
        .query_selector_all("#accessibility-controls button")
        .expect("query buttons");
    assert_eq!(buttons.length(), 4);
    let styles = doc
        .query_selector_all("#accessibility-styles")
        .expect("query styles");
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn service_mutations_update_root_and_storage() {
    let config = ControlsConfig::default();
    reset_page(&config);

    let booted = boot(&config);
    booted.service.increase_font_size();
    booted.service.toggle_high_contrast();
    assert_eq!(root_font_size(), "110%");
    assert!(a11y::high_contrast_active());
    assert_eq!(
        dom::local_storage()
            .expect("storage")
            .get_item(STORAGE_KEY)
            .expect("read")
            .as_deref(),
        Some(r#"{"fontSize":110,"highContrastEnabled":true}"#)
    );

    booted.service.toggle_high_contrast();
    assert!(!a11y::high_contrast_active());
}

#[wasm_bindgen_test]
fn scroll_listener_reports_threshold_crossings() {
    let win = dom::window().expect("window");
    let body = dom::document()
        .and_then(|doc| doc.body())
        .expect("body");
    let _ = body.style().set_property("min-height", "5000px");
    win.scroll_to_with_x_and_y(0.0, 0.0);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let listener = {
        let seen = seen.clone();
        ScrollListener::attach(move |next| seen.borrow_mut().push(next)).expect("listener")
    };

    win.scroll_to_with_x_and_y(0.0, 150.0);
    dispatch_scroll();
    assert!(seen.borrow().is_empty());

    win.scroll_to_with_x_and_y(0.0, 250.0);
    dispatch_scroll();
    assert_eq!(seen.borrow().last(), Some(&ScrollTopVisibility::Visible));

    win.scroll_to_with_x_and_y(0.0, 100.0);
    dispatch_scroll();
    assert_eq!(seen.borrow().last(), Some(&ScrollTopVisibility::Hidden));

    drop(listener);
    win.scroll_to_with_x_and_y(0.0, 0.0);
    let _ = body.style().remove_property("min-height");
}

#[wasm_bindgen_test]
fn repeated_boot_keeps_session_state() {
    let config = ControlsConfig::default();
    reset_page(&config);

    let first = boot(&config);
    first.service.increase_font_size();
    dom::local_storage()
        .expect("storage")
        .set_item(STORAGE_KEY, r#"{"fontSize":60,"highContrastEnabled":true}"#)
        .expect("overwrite record");

    let second = boot(&config);
    assert!(!second.injected);
    assert_eq!(second.service.preferences().font_size, 110);
    assert_eq!(root_font_size(), "110%");
    assert!(!a11y::high_contrast_active());
}

#[wasm_bindgen_test]
async fn clicking_contrast_button_updates_label_root_and_storage() {
    let config = ControlsConfig::default();
    reset_page(&config);
    boot(&config);
    settle().await;

    contrast_button().click();
    settle().await;
    let toggle = contrast_button();
    assert_eq!(toggle.text_content().as_deref(), Some("Contrast: ON"));
    assert_eq!(
        toggle.style().get_property_value("font-weight").expect("weight"),
        "bold"
    );
    assert!(a11y::high_contrast_active());
    assert_eq!(
        stored_record().as_deref(),
        Some(r#"{"fontSize":100,"highContrastEnabled":true}"#)
    );

    contrast_button().click();
    settle().await;
    let toggle = contrast_button();
    assert_eq!(toggle.text_content().as_deref(), Some("Contrast: OFF"));
    assert_eq!(
        toggle.style().get_property_value("font-weight").expect("weight"),
        "normal"
    );
    assert!(!a11y::high_contrast_active());
}

#[wasm_bindgen_test]
async fn clicking_font_buttons_rescales_root_and_persists() {
    let config = ControlsConfig::default();
    reset_page(&config);
    boot(&config);
    settle().await;

    button("#accessibility-controls button.font-increase").click();
    settle().await;
    button("#accessibility-controls button.font-increase").click();
    settle().await;
    assert_eq!(root_font_size(), "120%");
    assert_eq!(
        stored_record().as_deref(),
        Some(r#"{"fontSize":120,"highContrastEnabled":false}"#)
    );

    button("#accessibility-controls button.font-decrease").click();
    settle().await;
    assert_eq!(root_font_size(), "110%");

    button("#accessibility-controls button.font-reset").click();
    settle().await;
    assert_eq!(root_font_size(), "100%");
    assert_eq!(
        stored_record().as_deref(),
        Some(r#"{"fontSize":100,"highContrastEnabled":false}"#)
    );
}

#[wasm_bindgen_test]
async fn back_to_top_button_shows_past_threshold_and_scrolls_up() {
    let config = ControlsConfig::default();
    reset_page(&config);
    let win = dom::window().expect("window");
    let body = dom::document()
        .and_then(|doc| doc.body())
        .expect("body");
    let _ = body.style().set_property("min-height", "5000px");
    win.scroll_to_with_x_and_y(0.0, 0.0);

    boot(&config);
    settle().await;
    let back = button("#back-to-top");
    assert_eq!(back.style().get_property_value("display").expect("display"), "none");

    win.scroll_to_with_x_and_y(0.0, 250.0);
    dispatch_scroll();
    settle().await;
    let back = button("#back-to-top");
    assert_eq!(back.style().get_property_value("display").expect("display"), "block");

    back.click();
    sleep_ms(1000).await;
    assert!(dom::scroll_offset_y() < 250.0);

    win.scroll_to_with_x_and_y(0.0, 0.0);
    let _ = body.style().remove_property("min-height");
}

#[wasm_bindgen_test]
async fn start_installs_logging_and_injects_controls() {
    let config = ControlsConfig::default();
    reset_page(&config);

    a11y_web::start();
    settle().await;
    assert!(log::max_level() >= log::LevelFilter::Warn);
    assert!(
        dom::document()
            .expect("document")
            .get_element_by_id(&config.container_id)
            .is_some()
    );
    assert_eq!(contrast_button().text_content().as_deref(), Some("Contrast: OFF"));
}

#[wasm_bindgen_test]
fn failed_injection_leaves_no_container_behind() {
    let config = ControlsConfig::default();
    let doc = dom::document()
        .expect("document")
        .implementation()
        .expect("implementation")
        .create_html_document()
        .expect("detached document");
    doc.body().expect("body").remove();

    assert!(ensure_mount_points(&doc, &config).is_err());
    assert!(doc.get_element_by_id(&config.container_id).is_none());
    assert!(doc.get_element_by_id(&config.scroll_host_id).is_none());

    let body = doc.create_element("body").expect("body element");
    doc.document_element()
        .expect("root")
        .append_child(&body)
        .expect("attach body");
    let mounts = ensure_mount_points(&doc, &config)
        .expect("injection succeeds")
        .expect("fresh mount points");
    assert_eq!(mounts.controls.id(), config.container_id);
    assert_eq!(mounts.scroll_host.id(), config.scroll_host_id);
    assert!(ensure_mount_points(&doc, &config).expect("second pass").is_none());
}
