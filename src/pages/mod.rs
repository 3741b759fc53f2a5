//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! `setup` is the pre-session account-setup screen; `home` is the profile
//! homepage shown once a session has started. The root `App` picks between
//! them based on the session gate.

pub mod home;
pub mod setup;
