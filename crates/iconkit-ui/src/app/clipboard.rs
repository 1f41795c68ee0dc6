//! Fire-and-forget clipboard writes.

use gloo::console;
use gloo::utils::window;
use wasm_bindgen_futures::{JsFuture, spawn_local};

/// Write `text` to the system clipboard without waiting for the result.
///
/// Rejections (permissions, insecure context) are logged to the console only.
pub(crate) fn copy_text(text: &str) {
    let promise = window().navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            console::warn!("clipboard write failed", err);
        }
    });
}
