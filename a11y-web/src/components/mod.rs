pub mod controls;
pub mod scroll_top;

pub use controls::AccessibilityControls;
pub use scroll_top::{ScrollTopButton, use_scroll_top_visibility};
