//! Routing definitions for the `IconKit` UI.
use yew_router::prelude::*;

/// Browser routes served by the app.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Catalog index listing every icon.
    #[at("/")]
    Catalog,
    /// Detail page for one icon.
    #[at("/icons-page/:slug")]
    Icon {
        /// Registry name of the icon.
        slug: String,
    },
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}
