//! Viewport width observation.
//!
//! Requires a browser environment; off-browser there is no viewport and no
//! resize events.

/// Current `window.innerWidth` in logical pixels.
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Call `on_width` with the new width after every window resize.
///
/// The listener lives until the current reactive owner is cleaned up.
pub fn watch_width(on_width: impl Fn(f64) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener};

        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_width() {
                on_width(width);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_width;
    }
}
