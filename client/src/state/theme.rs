//! Light/dark theme controller.
//!
//! DESIGN
//! ======
//! The controller owns the displayed flag and two collaborators: a
//! [`PreferenceStore`] it saves to on every change, and a [`ThemeMarker`]
//! that mirrors the flag onto the document. Both are injected so the
//! controller has no hidden global state and runs unchanged off-browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::settings::{PreferenceStore, Settings};
use crate::util::dark_mode::DocumentRoot;
use crate::util::storage::BrowserStore;

/// Presentation boundary that reflects the theme flag.
pub trait ThemeMarker {
    fn apply(&self, dark: bool);
}

/// Controller wired to `localStorage` and the `<html>` element.
pub type SiteTheme = ThemeController<BrowserStore, DocumentRoot>;

#[derive(Clone, Debug)]
pub struct ThemeController<S, M> {
    settings: Settings,
    store: S,
    marker: M,
}

impl<S: PreferenceStore, M: ThemeMarker> ThemeController<S, M> {
    /// Build a controller from already-loaded settings and apply the marker.
    ///
    /// Construction does not write to `store`.
    pub fn new(settings: Settings, store: S, marker: M) -> Self {
        marker.apply(settings.theme_is_dark);
        Self { settings, store, marker }
    }

    pub fn is_dark(&self) -> bool {
        self.settings.theme_is_dark
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Flip the theme, update the marker, and persist. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.settings.theme_is_dark = !self.settings.theme_is_dark;
        let dark = self.settings.theme_is_dark;
        self.marker.apply(dark);
        self.settings.save(&self.store);
        log::debug!("theme toggled; dark={dark}");
        dark
    }
}

/// Label for the desktop toggle button.
#[must_use]
pub fn toggle_label(dark: bool) -> &'static str {
    if dark { "☀️ Light" } else { "🌙 Dark" }
}

/// Icon for the compact mobile toggle button.
#[must_use]
pub fn toggle_icon(dark: bool) -> &'static str {
    if dark { "☀️" } else { "🌙" }
}
