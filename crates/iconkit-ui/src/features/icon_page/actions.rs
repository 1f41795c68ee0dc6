//! Click-to-copy targets and preview toolbar actions.
//!
//! # Design
//! - Each clickable value maps to an enum variant with its tooltip and payload.
//! - Clipboard writes flow through a `Callback<String>` supplied by the page.
//! - Download actions are placeholders and resolve to no effect.

use iconkit_catalog::Icon;
use yew::Callback;

use crate::features::icon_page::logic::IconFacts;

/// Metadata values that copy themselves on click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    /// Icon slug.
    Name,
    /// React/Vue component name.
    ReactName,
    /// Hex codepoint.
    Unicode,
    /// HTML character reference.
    HtmlChar,
    /// Webfont element.
    Webfont,
}

impl CopyTarget {
    /// Tooltip shown on hover.
    #[must_use]
    pub const fn tooltip(self) -> &'static str {
        match self {
            Self::Name => "Copy name",
            Self::ReactName => "Copy React name",
            Self::Unicode => "Copy hex",
            Self::HtmlChar => "Copy HTML char",
            Self::Webfont => "Copy webfont HTML",
        }
    }

    /// Exact text written to the clipboard.
    #[must_use]
    pub fn payload(self, facts: &IconFacts) -> String {
        match self {
            Self::Name => facts.name.clone(),
            Self::ReactName => facts.react_name.clone(),
            Self::Unicode => facts.unicode.clone(),
            Self::HtmlChar => facts.html_char.clone(),
            Self::Webfont => facts.webfont_markup.clone(),
        }
    }

    /// Send this target's payload to the clipboard sink.
    pub fn copy(self, facts: &IconFacts, clipboard: &Callback<String>) {
        clipboard.emit(self.payload(facts));
    }
}

/// Buttons above the snippet tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewAction {
    /// Copy raw SVG markup.
    CopySvg,
    /// Download as SVG (not implemented).
    DownloadSvg,
    /// Download as PNG (not implemented).
    DownloadPng,
}

impl PreviewAction {
    /// All actions in toolbar order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::CopySvg, Self::DownloadSvg, Self::DownloadPng]
    }

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CopySvg => "Copy SVG",
            Self::DownloadSvg => "Download SVG",
            Self::DownloadPng => "Download PNG",
        }
    }

    /// Registry icon drawn inside the button.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::CopySvg => "copy",
            Self::DownloadSvg | Self::DownloadPng => "download",
        }
    }

    /// Whether the button uses the primary style.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::CopySvg)
    }

    /// Text copied by the action; `None` for actions without an effect.
    #[must_use]
    pub fn clipboard_payload(self, icon: &Icon) -> Option<String> {
        match self {
            Self::CopySvg => Some(icon.svg.clone()),
            Self::DownloadSvg | Self::DownloadPng => None,
        }
    }

    /// Run the action; returns whether anything was dispatched.
    #[must_use]
    pub fn perform(self, icon: &Icon, clipboard: &Callback<String>) -> bool {
        let Some(text) = self.clipboard_payload(icon) else {
            return false;
        };
        clipboard.emit(text);
        true
    }
}
