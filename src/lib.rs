//! # punsta-client
//!
//! Leptos + WASM front-end for Punsta, a rapper-career simulator styled after
//! a video-sharing platform. The player creates a "Punster Profile", customizes
//! its appearance and homepage layout, and builds an audience.
//!
//! This crate contains pages, components, and the shared game state. All state
//! lives in-memory in `RwSignal` contexts provided by the root `App` component;
//! there is no server, no persistence, and no background work.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
