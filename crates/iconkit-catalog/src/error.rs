//! Error types for registry loading and validation.

use thiserror::Error;

/// Primary error type for icon registry operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Registry payload was not valid JSON for the expected shape.
    #[error("failed to parse icon registry")]
    Parse {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Icon name is not a lowercase slug.
    #[error("invalid icon name")]
    InvalidName {
        /// Offending icon name.
        name: String,
    },
    /// Unicode codepoint was not a short hexadecimal string.
    #[error("invalid unicode codepoint")]
    InvalidUnicode {
        /// Icon carrying the codepoint.
        name: String,
        /// Offending codepoint value.
        value: String,
    },
    /// Markup did not look like an inline SVG document.
    #[error("invalid svg markup")]
    InvalidSvg {
        /// Icon carrying the markup.
        name: String,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}
