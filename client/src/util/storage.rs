//! Browser `localStorage` access behind [`PreferenceStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue so state modules can persist
//! settings without touching the browser directly. Off-browser every read
//! misses and every write is dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::settings::PreferenceStore;

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write to {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}
