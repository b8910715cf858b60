//! Mobile navigation panel state.
//!
//! The panel is only reachable below [`NAV_COLLAPSE_WIDTH`]; once the viewport
//! grows past it the desktop nav takes over and the panel is forced shut.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Widths above this (logical pixels) always close the mobile panel.
pub const NAV_COLLAPSE_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Feed a viewport width from the resize observer. Never opens the panel.
    ///
    /// Returns `true` when the observation closed an open panel.
    pub fn observe_width(&mut self, width: f64) -> bool {
        if width > NAV_COLLAPSE_WIDTH && self.open {
            self.open = false;
            return true;
        }
        false
    }
}

/// Glyph for the hamburger button.
#[must_use]
pub fn toggle_glyph(open: bool) -> &'static str {
    if open { "✖" } else { "☰" }
}
