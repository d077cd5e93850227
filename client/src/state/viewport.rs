//! Viewport width tracking and the mobile/desktop layout split.
//!
//! DESIGN
//! ======
//! The mode is always derived from the tracked width, never stored on its
//! own, so a resize cannot leave the two out of sync. The width lives in a
//! context-provided signal fed by `util::viewport`; tests drive layout by
//! setting the signal instead of resizing a real window.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Width below this renders the mobile card list.
pub const MOBILE_BREAKPOINT: f64 = 600.0;

/// Layout selection derived from viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    /// Width below 600 logical pixels: title/subtitle card list.
    Mobile,
    /// Width 600 and up: full column table.
    Desktop,
}

/// Current viewport width, updated by the resize listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f64,
}

impl ViewportState {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    #[must_use]
    pub fn mode(self) -> ViewportMode {
        if self.width < MOBILE_BREAKPOINT {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }
}

impl Default for ViewportState {
    /// Desktop-sized default for server rendering, where no window exists.
    /// The hydrate pass corrects it from the real window on mount.
    fn default() -> Self {
        Self::new(1024.0)
    }
}
