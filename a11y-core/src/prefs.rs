use crate::constants::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP};
use serde::{Deserialize, Serialize};

/// The persisted accessibility preferences.
///
/// Serialized as `{"fontSize": 100, "highContrastEnabled": false}`. Fields
/// missing from a stored object fall back to their defaults, and the older
/// `highContrast` key is read when `highContrastEnabled` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredPreferences")]
pub struct Preferences {
    /// Root font size as a percentage.
    pub font_size: i32,
    pub high_contrast_enabled: bool,
}

/// Wire shape accepted when reading; every field is optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreferences {
    font_size: Option<i32>,
    high_contrast_enabled: Option<bool>,
    high_contrast: Option<bool>,
}

impl From<StoredPreferences> for Preferences {
    fn from(stored: StoredPreferences) -> Self {
        let defaults = Self::default();
        Self {
            font_size: stored.font_size.unwrap_or(defaults.font_size),
            high_contrast_enabled: stored
                .high_contrast_enabled
                .or(stored.high_contrast)
                .unwrap_or(defaults.high_contrast_enabled),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            high_contrast_enabled: false,
        }
    }
}

impl Preferences {
    #[must_use]
    pub const fn new(font_size: i32, high_contrast_enabled: bool) -> Self {
        Self {
            font_size,
            high_contrast_enabled,
        }
    }

    /// Step the font size by `steps` increments of [`FONT_SIZE_STEP`],
    /// saturating at the configured bounds.
    ///
    /// The step is applied to the current value as-is; a stored size that is
    /// not a multiple of ten keeps its offset.
    pub fn step_font_size(&mut self, steps: i32) {
        let delta = steps.saturating_mul(FONT_SIZE_STEP);
        self.font_size = clamp_font_size(self.font_size.saturating_add(delta));
    }

    pub fn increase_font_size(&mut self) {
        self.step_font_size(1);
    }

    pub fn decrease_font_size(&mut self) {
        self.step_font_size(-1);
    }

    pub const fn reset_font_size(&mut self) {
        self.font_size = FONT_SIZE_DEFAULT;
    }

    /// Flip high-contrast mode and return the new value.
    pub const fn toggle_high_contrast(&mut self) -> bool {
        self.high_contrast_enabled = !self.high_contrast_enabled;
        self.high_contrast_enabled
    }

    /// CSS value for the root `font-size` property, e.g. `"150%"`.
    #[must_use]
    pub fn font_size_css(&self) -> String {
        format!("{}%", self.font_size)
    }
}

/// Saturate a font size percentage into `[FONT_SIZE_MIN, FONT_SIZE_MAX]`.
#[must_use]
pub const fn clamp_font_size(value: i32) -> i32 {
    if value < FONT_SIZE_MIN {
        FONT_SIZE_MIN
    } else if value > FONT_SIZE_MAX {
        FONT_SIZE_MAX
    } else {
        value
    }
}
