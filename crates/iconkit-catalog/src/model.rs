//! Icon record shared by the registry and the UI.

use serde::{Deserialize, Serialize};

/// Metadata for a single icon. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Unique slug, also the route segment on the detail page.
    pub name: String,
    /// Inline SVG markup.
    pub svg: String,
    /// Hex codepoint of the webfont glyph (no prefix, e.g. `eac1`).
    pub unicode: String,
    /// Category the icon is filed under.
    pub category: String,
    /// Search tags in stored order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Release the icon was added in.
    pub version: String,
}

/// Icon payload as stored in the registry file, keyed by name.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredIcon {
    pub(crate) svg: String,
    pub(crate) unicode: String,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
    pub(crate) version: String,
}

impl StoredIcon {
    pub(crate) fn into_icon(self, name: String) -> Icon {
        Icon {
            name,
            svg: self.svg,
            unicode: self.unicode,
            category: self.category,
            tags: self.tags,
            version: self.version,
        }
    }
}
