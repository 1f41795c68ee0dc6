#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Static icon registry for the `IconKit` catalog.
//!
//! Layout: `model.rs` (the immutable [`Icon`] record), `registry.rs`
//! (validated name → icon lookup plus the bundled dataset), `naming.rs`
//! (derived identifiers such as React component names and HTML entities),
//! `error.rs` (validation failures).

pub mod error;
pub mod model;
pub mod naming;
pub mod registry;

pub use error::{CatalogError, CatalogResult};
pub use model::Icon;
pub use naming::{
    DEFAULT_CLASS_PREFIX, css_content, html_char, react_name, scss_variable, webfont_class,
    webfont_markup,
};
pub use registry::IconRegistry;
