//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain: `game` holds the session and the player's profile
//! (the single source of truth every component renders from), `draft` holds
//! staged-but-uncommitted profile edits, and `ui` holds transient presentation
//! toggles. Components receive each model as an `RwSignal` via Leptos context.

pub mod draft;
pub mod game;
pub mod ui;
