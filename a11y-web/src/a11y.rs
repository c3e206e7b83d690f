// Accessibility helpers

use a11y_core::PageSurface;
use a11y_core::constants::HIGH_CONTRAST_CLASS;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Get CSS for the high-contrast mode and the injected controls
///
/// High-contrast rules are scoped to `html.high-contrast` and never touch
/// images or other media, which keep their original colours and filters.
#[must_use]
pub const fn accessibility_css() -> &'static str {
    concat!(
        "html.high-contrast body{background:#000!important;color:#fff!important}",
        "html.high-contrast :not(img):not(picture):not(video):not(canvas):not(svg):not(svg *){",
        "background-color:#000!important;color:#fff!important;border-color:#ff0!important}",
        "html.high-contrast a,html.high-contrast a *{color:#ff0!important}",
        "html.high-contrast img,html.high-contrast picture,html.high-contrast video,",
        "html.high-contrast canvas,html.high-contrast svg{filter:none!important}",
        "#accessibility-controls{position:fixed;top:10px;right:10px;z-index:1000;display:flex;gap:4px}",
        "#accessibility-controls button{font-size:16px;padding:4px 8px;cursor:pointer}",
        "#back-to-top{position:fixed;bottom:20px;right:20px;z-index:1000;display:none;",
        "font-size:20px;padding:6px 12px;cursor:pointer}",
        ":focus-visible{outline:3px solid #00D9C0;outline-offset:2px}",
    )
}

fn root_element() -> Option<HtmlElement> {
    crate::dom::document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Toggle high-contrast mode for accessibility
///
/// Adds or removes the `high-contrast` class on the `<html>` element.
pub fn set_high_contrast(enabled: bool) {
    if let Some(html) = root_element() {
        let _ = if enabled {
            html.class_list().add_1(HIGH_CONTRAST_CLASS)
        } else {
            html.class_list().remove_1(HIGH_CONTRAST_CLASS)
        };
    }
}

/// Check if the `high-contrast` class is currently on the `<html>` element.
#[must_use]
pub fn high_contrast_active() -> bool {
    root_element().is_some_and(|html| html.class_list().contains(HIGH_CONTRAST_CLASS))
}

/// Set the root font size; relative units across the page scale with it.
pub fn set_root_font_size(css_value: &str) {
    if let Some(html) = root_element() {
        let _ = html.style().set_property("font-size", css_value);
    }
}

/// The live document as a [`PageSurface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPage;

impl PageSurface for DomPage {
    fn apply_font_size(&self, css_value: &str) {
        set_root_font_size(css_value);
    }

    fn apply_high_contrast(&self, enabled: bool) {
        set_high_contrast(enabled);
    }
}
