//! Derived identifiers for an icon name or codepoint.
//!
//! # Design
//! - Every helper is a pure string transform; nothing here touches the registry.
//! - The class prefix is a parameter so the webfont flavour can be configured.

/// Class prefix used by the bundled webfont (`ti ti-home`).
pub const DEFAULT_CLASS_PREFIX: &str = "ti";

/// React/Vue component name for an icon slug.
///
/// Segments split on `-`, `_` and whitespace are title-cased and joined behind
/// an `Icon` prefix, so `arrow-left` becomes `IconArrowLeft`.
#[must_use]
pub fn react_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    out.push_str("Icon");
    for segment in name
        .split(|ch: char| ch == '-' || ch == '_' || ch.is_whitespace())
        .filter(|segment| !segment.is_empty())
    {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

/// HTML character reference for a hex codepoint (`&#xeac1;`).
#[must_use]
pub fn html_char(unicode: &str) -> String {
    format!("&#x{unicode};")
}

/// Webfont class list for an icon (`ti ti-home`).
#[must_use]
pub fn webfont_class(prefix: &str, name: &str) -> String {
    format!("{prefix} {prefix}-{name}")
}

/// Complete webfont element for an icon (`<i class="ti ti-home"></i>`).
#[must_use]
pub fn webfont_markup(prefix: &str, name: &str) -> String {
    format!("<i class=\"{}\"></i>", webfont_class(prefix, name))
}

/// CSS `content` declaration rendering the glyph.
#[must_use]
pub fn css_content(unicode: &str) -> String {
    format!("content: '\\{unicode}';")
}

/// SCSS variable exported by the webfont stylesheet (`$ti-icon-home`).
#[must_use]
pub fn scss_variable(prefix: &str, name: &str) -> String {
    format!("${prefix}-icon-{name}")
}
