use super::*;

// =============================================================
// parse_theme_flag
// =============================================================

#[test]
fn parse_theme_flag_reads_json_booleans() {
    assert!(parse_theme_flag(Some("true")));
    assert!(!parse_theme_flag(Some("false")));
}

#[test]
fn parse_theme_flag_defaults_to_light_when_absent() {
    assert!(!parse_theme_flag(None));
}

#[test]
fn parse_theme_flag_treats_null_as_no_preference() {
    assert!(!parse_theme_flag(Some("null")));
}

#[test]
fn parse_theme_flag_swallows_malformed_values() {
    for raw in ["", "tru", "{", "\"true\"", "1", "[true]", "dark"] {
        assert!(!parse_theme_flag(Some(raw)), "{raw:?} should read as light");
    }
}

#[test]
fn parse_theme_flag_reads_truthy_json_as_light() {
    for raw in ["1", "\"true\"", "\"yes\"", "{\"dark\":true}"] {
        assert!(!parse_theme_flag(Some(raw)), "{raw:?} is not a JSON boolean");
    }
}

#[test]
fn encode_theme_flag_is_json() {
    assert_eq!(encode_theme_flag(true), "true");
    assert_eq!(encode_theme_flag(false), "false");
}

// =============================================================
// Settings
// =============================================================

#[test]
fn settings_default_is_light() {
    assert!(!Settings::default().theme_is_dark);
}

#[test]
fn settings_load_from_empty_store_is_default() {
    let store = MemoryStore::default();
    assert_eq!(Settings::load(&store), Settings::default());
}

#[test]
fn settings_load_reads_theme_key() {
    let store = MemoryStore::with_value(THEME_KEY, "true");
    assert!(Settings::load(&store).theme_is_dark);
}

#[test]
fn settings_load_ignores_other_keys() {
    let store = MemoryStore::with_value("somethingElse", "true");
    assert!(!Settings::load(&store).theme_is_dark);
}

#[test]
fn settings_save_then_load_preserves_flag() {
    let store = MemoryStore::default();
    Settings { theme_is_dark: true }.save(&store);
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("true"));
    assert!(Settings::load(&store).theme_is_dark);
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_clones_share_slots() {
    let store = MemoryStore::default();
    let view = store.clone();
    store.write("k", "v");
    assert_eq!(view.read("k").as_deref(), Some("v"));
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::with_value("k", "old");
    store.write("k", "new");
    assert_eq!(store.read("k").as_deref(), Some("new"));
}
