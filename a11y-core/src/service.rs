//! The preference controller: one in-memory record, a store and a page.

use crate::constants::{CONTRAST_LABEL_OFF, CONTRAST_LABEL_ON};
use crate::prefs::Preferences;
use crate::storage::{KeyValueStorage, PreferenceStore};
use std::cell::Cell;

/// The visual side of the page the preferences are applied to.
///
/// Platform-specific implementations should provide this. Both calls must be
/// no-ops when the underlying elements are missing.
pub trait PageSurface {
    /// Set the root text scale, e.g. `"150%"`.
    fn apply_font_size(&self, css_value: &str);

    /// Add or remove the high-contrast marker on the page root.
    fn apply_high_contrast(&self, enabled: bool);
}

/// Text and emphasis of the contrast toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastLabel {
    pub text: &'static str,
    pub bold: bool,
}

impl ContrastLabel {
    #[must_use]
    pub const fn for_state(enabled: bool) -> Self {
        if enabled {
            Self {
                text: CONTRAST_LABEL_ON,
                bold: true,
            }
        } else {
            Self {
                text: CONTRAST_LABEL_OFF,
                bold: false,
            }
        }
    }

    /// Value for the button's CSS `font-weight` property.
    #[must_use]
    pub const fn font_weight(self) -> &'static str {
        if self.bold { "bold" } else { "normal" }
    }
}

/// Owns the session's preference record.
///
/// Constructed once per page load and shared with every control. Each
/// mutation updates the in-memory record, re-applies it to the page and
/// writes it back. A failed write leaves the in-memory record authoritative
/// for the rest of the session.
pub struct PreferenceService<S, P> {
    store: PreferenceStore<S>,
    page: P,
    current: Cell<Preferences>,
}

impl<S, P> PreferenceService<S, P>
where
    S: KeyValueStorage,
    P: PageSurface,
{
    /// Load the stored record (or defaults). Nothing is applied or written yet.
    pub fn new(store: PreferenceStore<S>, page: P) -> Self {
        let current = store.load();
        log::debug!(
            "loaded preferences: font {}%, high contrast {}",
            current.font_size,
            current.high_contrast_enabled
        );
        Self {
            store,
            page,
            current: Cell::new(current),
        }
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.current.get()
    }

    #[must_use]
    pub fn contrast_label(&self) -> ContrastLabel {
        ContrastLabel::for_state(self.current.get().high_contrast_enabled)
    }

    #[must_use]
    pub const fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Push the current record onto the page without persisting it.
    pub fn apply(&self) {
        let prefs = self.current.get();
        self.page.apply_font_size(&prefs.font_size_css());
        self.page.apply_high_contrast(prefs.high_contrast_enabled);
    }

    pub fn increase_font_size(&self) -> Preferences {
        self.update(Preferences::increase_font_size)
    }

    pub fn decrease_font_size(&self) -> Preferences {
        self.update(Preferences::decrease_font_size)
    }

    pub fn reset_font_size(&self) -> Preferences {
        self.update(Preferences::reset_font_size)
    }

    pub fn toggle_high_contrast(&self) -> Preferences {
        self.update(|prefs| {
            prefs.toggle_high_contrast();
        })
    }

    fn update(&self, mutate: impl FnOnce(&mut Preferences)) -> Preferences {
        let mut prefs = self.current.get();
        mutate(&mut prefs);
        self.current.set(prefs);
        self.apply();
        self.store.save(&prefs);
        prefs
    }
}
