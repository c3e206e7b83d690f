use a11y_core::{KeyValueStorage, PageSurface, PreferenceService, Preferences};
use std::rc::Rc;

/// Object-safe view of a [`PreferenceService`] handed to the controls.
///
/// Lets the components stay non-generic while tests drive them with an
/// in-memory store and the page drives them with `localStorage` and the DOM.
pub trait PreferenceControls {
    fn preferences(&self) -> Preferences;
    fn increase_font_size(&self) -> Preferences;
    fn decrease_font_size(&self) -> Preferences;
    fn reset_font_size(&self) -> Preferences;
    fn toggle_high_contrast(&self) -> Preferences;
}

impl<S, P> PreferenceControls for PreferenceService<S, P>
where
    S: KeyValueStorage,
    P: PageSurface,
{
    fn preferences(&self) -> Preferences {
        PreferenceService::preferences(self)
    }

    fn increase_font_size(&self) -> Preferences {
        PreferenceService::increase_font_size(self)
    }

    fn decrease_font_size(&self) -> Preferences {
        PreferenceService::decrease_font_size(self)
    }

    fn reset_font_size(&self) -> Preferences {
        PreferenceService::reset_font_size(self)
    }

    fn toggle_high_contrast(&self) -> Preferences {
        PreferenceService::toggle_high_contrast(self)
    }
}

/// Shared handle passed through component props.
pub type ControlsHandle = Rc<dyn PreferenceControls>;

/// Identity comparison for props: two handles are equal when they point at
/// the same service.
#[must_use]
pub fn same_handle(a: &ControlsHandle, b: &ControlsHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
