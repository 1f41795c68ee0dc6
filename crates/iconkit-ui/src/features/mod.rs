//! Feature slices: each owns its state, pure logic, and (on wasm) its views.

pub mod catalog;
pub mod icon_page;
