use crate::constants::SCROLL_TOP_THRESHOLD_PX;

/// Visibility of the floating scroll-to-top button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollTopVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ScrollTopVisibility {
    /// Visibility for a vertical scroll offset in CSS pixels.
    #[must_use]
    pub fn for_offset(offset_y: f64) -> Self {
        if offset_y > SCROLL_TOP_THRESHOLD_PX {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Value for the button's CSS `display` property.
    #[must_use]
    pub const fn css_display(self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }
}

/// Two-state machine fed with every scroll offset.
///
/// [`ScrollTopTracker::observe`] reports only transitions so callers can skip
/// redundant DOM writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTopTracker {
    state: ScrollTopVisibility,
}

impl ScrollTopTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ScrollTopVisibility::Hidden,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ScrollTopVisibility {
        self.state
    }

    /// Feed the current offset; returns the new state when it changed.
    pub fn observe(&mut self, offset_y: f64) -> Option<ScrollTopVisibility> {
        let next = ScrollTopVisibility::for_offset(offset_y);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}
