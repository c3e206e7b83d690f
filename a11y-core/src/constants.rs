//! Fixed values shared by the preference store, the mutators and the page controls.

/// `localStorage` key holding the serialized preference record.
pub const STORAGE_KEY: &str = "accessibilitySettings";

pub const FONT_SIZE_DEFAULT: i32 = 100;
pub const FONT_SIZE_MIN: i32 = 50;
pub const FONT_SIZE_MAX: i32 = 200;
/// Percentage points added or removed by one increase/decrease.
pub const FONT_SIZE_STEP: i32 = 10;

/// Vertical offset in CSS pixels above which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 200.0;

/// Class placed on the document root while high-contrast mode is on.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

pub const CONTRAST_LABEL_ON: &str = "Contrast: ON";
pub const CONTRAST_LABEL_OFF: &str = "Contrast: OFF";
