//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure, browser-free helpers for media reference templates and display
//! formatting, kept out of components so they stay unit-testable.

pub mod format;
pub mod media;
