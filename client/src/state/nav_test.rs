use super::*;

// =============================================================
// Manual controls
// =============================================================

#[test]
fn nav_starts_closed() {
    assert!(!NavState::default().open);
}

#[test]
fn open_close_toggle_mutate_flag() {
    let mut nav = NavState::default();
    nav.open();
    assert!(nav.open);
    nav.close();
    assert!(!nav.open);
    nav.toggle();
    assert!(nav.open);
    nav.toggle();
    assert!(!nav.open);
}

// =============================================================
// Viewport observer
// =============================================================

#[test]
fn narrow_to_wide_forces_closed() {
    let mut nav = NavState::default();
    nav.observe_width(500.0);
    nav.open();
    assert!(nav.observe_width(1024.0));
    assert!(!nav.open);
}

#[test]
fn wide_observation_keeps_closed_panel_closed() {
    let mut nav = NavState::default();
    assert!(!nav.observe_width(1200.0));
    assert!(!nav.open);
}

#[test]
fn wide_to_narrow_never_changes_flag() {
    let mut nav = NavState::default();
    nav.observe_width(1200.0);
    assert!(!nav.observe_width(400.0));
    assert!(!nav.open);

    nav.open();
    assert!(!nav.observe_width(320.0));
    assert!(nav.open);
}

#[test]
fn threshold_itself_counts_as_narrow() {
    let mut nav = NavState { open: true };
    assert!(!nav.observe_width(NAV_COLLAPSE_WIDTH));
    assert!(nav.open);
    assert!(nav.observe_width(NAV_COLLAPSE_WIDTH + 1.0));
    assert!(!nav.open);
}

#[test]
fn toggle_glyph_reflects_state() {
    assert_eq!(toggle_glyph(false), "☰");
    assert_eq!(toggle_glyph(true), "✖");
}
