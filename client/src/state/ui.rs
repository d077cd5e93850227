//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation chrome out of domain state (`columns`, `grid`) so the
//! toolbar can evolve independently of grid data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for page chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
