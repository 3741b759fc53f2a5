//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the platform chrome and the profile dialogs, reading and
//! writing shared state through the Leptos context providers set up in `app`.

pub mod about_profile_modal;
pub mod ad_campaign_modal;
pub mod customize_profile_modal;
pub mod header;
pub mod sidebar;
