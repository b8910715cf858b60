//! Persisted user settings and the key-value store they live in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site persists exactly one preference: whether the dark theme is on.
//! It is stored as a JSON boolean under [`THEME_KEY`]. Anything else found in
//! that slot (missing, `null`, a number, broken JSON) reads as "no
//! preference", which means light.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key holding the JSON-encoded theme flag.
pub const THEME_KEY: &str = "themeIsDark";

/// Durable key-value slot surviving across sessions.
///
/// Writes are best-effort: implementations swallow failures.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// User preferences loaded once at startup and saved on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme_is_dark: bool,
}

impl Settings {
    /// Read settings from `store`, defaulting every missing or malformed value.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let raw = store.read(THEME_KEY);
        Self { theme_is_dark: parse_theme_flag(raw.as_deref()) }
    }

    /// Write every setting back to `store`.
    pub fn save(&self, store: &impl PreferenceStore) {
        store.write(THEME_KEY, &encode_theme_flag(self.theme_is_dark));
    }
}

/// Decode a stored theme flag. Only a JSON `true` means dark.
///
/// Unlike a JavaScript truthiness check, truthy non-boolean JSON such as `1`
/// or `"true"` reads as light.
#[must_use]
pub fn parse_theme_flag(raw: Option<&str>) -> bool {
    raw.and_then(|text| serde_json::from_str::<Option<bool>>(text).ok())
        .flatten()
        .unwrap_or(false)
}

/// Encode a theme flag the way [`parse_theme_flag`] expects it.
#[must_use]
pub fn encode_theme_flag(dark: bool) -> String {
    serde_json::Value::Bool(dark).to_string()
}

/// In-memory store. Clones share the same slots.
///
/// Used off-browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Store pre-seeded with one raw value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.write(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        let slots = self.slots.lock().ok()?;
        slots.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        match self.slots.lock() {
            Ok(mut slots) => {
                slots.insert(key.to_owned(), value.to_owned());
            }
            Err(_) => log::warn!("memory store poisoned; dropping write to {key}"),
        }
    }
}
