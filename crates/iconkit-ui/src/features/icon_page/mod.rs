//! Icon detail page feature wiring.
//!
//! # Design
//! - Resolve the route slug once and hand a borrowed icon to the panels.
//! - Keep formatting, snippet rendering, and preview state free of browser types.
//! - Views only map these values to markup and forward clicks.

pub mod actions;
pub mod logic;
pub mod snippets;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
