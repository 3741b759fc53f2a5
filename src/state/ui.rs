//! Transient UI chrome state (open dialog, sidebar hover).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the game state so saving a profile or
//! starting a session never depends on which dialog happens to be open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which modal dialog is currently open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    /// Profile customization (name, bio, media queries, layout).
    Customize,
    /// Read-only profile details and stats.
    About,
    /// One-time ad campaign confirmation.
    AdCampaign,
}

/// UI state for dialogs and the collapsible sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently open dialog, if any.
    pub open_dialog: Option<DialogKind>,
    /// True while the pointer is over the shell; expands the sidebar.
    pub sidebar_hovered: bool,
}
