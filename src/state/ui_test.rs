use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_open_dialog() {
    let state = UiState::default();
    assert_eq!(state.open_dialog, None);
}

#[test]
fn ui_state_default_sidebar_collapsed() {
    let state = UiState::default();
    assert!(!state.sidebar_hovered);
}

// =============================================================
// DialogKind
// =============================================================

#[test]
fn dialog_kinds_are_distinct() {
    assert_ne!(DialogKind::Customize, DialogKind::About);
    assert_ne!(DialogKind::Customize, DialogKind::AdCampaign);
    assert_ne!(DialogKind::About, DialogKind::AdCampaign);
}
