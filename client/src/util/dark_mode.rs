//! Dark-mode marker on the document root.
//!
//! Adds or removes the `dark` class on the `<html>` element so the stylesheet
//! can switch palettes. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Off-browser (SSR, unit tests) the marker is a no-op so server rendering
//! stays deterministic; the page is always rendered light and corrected after
//! hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMarker;

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// The `<html>` element of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeMarker for DocumentRoot {
    fn apply(&self, dark: bool) {
        apply(dark);
    }
}

/// Apply or remove the [`DARK_CLASS`] class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                let result = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
                if result.is_err() {
                    log::warn!("could not update the {DARK_CLASS} class on <html>");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
