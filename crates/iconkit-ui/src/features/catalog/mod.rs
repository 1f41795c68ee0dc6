//! Catalog index listing every registry icon.

#[cfg(target_arch = "wasm32")]
pub mod view;
