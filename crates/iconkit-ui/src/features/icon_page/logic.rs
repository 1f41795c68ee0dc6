//! Slug resolution and metadata formatting for the icon detail page.
//!
//! # Design
//! - A missing slug is an ordinary outcome rendered inline, not an error value.
//! - Derived strings are computed once per render into [`IconFacts`].

use iconkit_catalog::{Icon, IconRegistry, html_char, react_name, webfont_class, webfont_markup};

use crate::config::SiteConfig;

/// Outcome of looking a route slug up in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconLookup<'a> {
    /// Icon exists.
    Found(&'a Icon),
    /// No icon has this exact name.
    Missing {
        /// Slug as requested.
        slug: &'a str,
    },
}

/// Exact-name lookup of a route slug.
#[must_use]
pub fn resolve_icon<'a>(registry: &'a IconRegistry, slug: &'a str) -> IconLookup<'a> {
    registry
        .get(slug)
        .map_or(IconLookup::Missing { slug }, IconLookup::Found)
}

/// Heading shown for an unknown slug.
#[must_use]
pub fn not_found_message(slug: &str) -> String {
    format!("Icon {slug} does not exist!")
}

/// Display values for the metadata panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconFacts {
    /// Icon slug.
    pub name: String,
    /// Component name for React/Vue packages.
    pub react_name: String,
    /// Hex codepoint as stored.
    pub unicode: String,
    /// HTML character reference.
    pub html_char: String,
    /// Webfont class list (`ti ti-home`).
    pub webfont_class: String,
    /// Webfont element (`<i class="ti ti-home"></i>`).
    pub webfont_markup: String,
    /// Category as stored.
    pub category: String,
    /// Added-in release.
    pub version: String,
    /// Changelog link for the release.
    pub changelog_href: String,
    /// Tags in stored order.
    pub tags: Vec<String>,
}

impl IconFacts {
    /// Derive every displayed value for `icon`.
    #[must_use]
    pub fn new(icon: &Icon, config: &SiteConfig) -> Self {
        Self {
            name: icon.name.clone(),
            react_name: react_name(&icon.name),
            unicode: icon.unicode.clone(),
            html_char: html_char(&icon.unicode),
            webfont_class: webfont_class(&config.class_prefix, &icon.name),
            webfont_markup: webfont_markup(&config.class_prefix, &icon.name),
            category: icon.category.clone(),
            version: icon.version.clone(),
            changelog_href: config.changelog_href(&icon.version),
            tags: icon.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconkit_test_support::fixtures::{home_icon, sample_registry};

    #[test]
    fn known_slug_resolves_to_stored_icon() {
        let registry = sample_registry();
        assert_eq!(
            resolve_icon(&registry, "home"),
            IconLookup::Found(&home_icon())
        );
    }

    #[test]
    fn unknown_slug_reports_only_the_slug() {
        let registry = sample_registry();
        let lookup = resolve_icon(&registry, "does-not-exist");
        assert_eq!(
            lookup,
            IconLookup::Missing {
                slug: "does-not-exist"
            }
        );
        assert_eq!(
            not_found_message("does-not-exist"),
            "Icon does-not-exist does not exist!"
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = sample_registry();
        assert!(matches!(
            resolve_icon(&registry, "HOME"),
            IconLookup::Missing { .. }
        ));
    }

    #[test]
    fn facts_keep_stored_values_verbatim() {
        let icon = home_icon();
        let facts = IconFacts::new(&icon, &SiteConfig::default());
        assert_eq!(facts.unicode, icon.unicode);
        assert_eq!(facts.category, icon.category);
        assert_eq!(facts.tags, icon.tags);
        assert_eq!(facts.version, "1.0.0");
    }

    #[test]
    fn facts_derive_names_and_links() {
        let facts = IconFacts::new(&home_icon(), &SiteConfig::default());
        assert_eq!(facts.react_name, "IconHome");
        assert_eq!(facts.html_char, "&#xeac1;");
        assert_eq!(facts.webfont_class, "ti ti-home");
        assert_eq!(facts.webfont_markup, "<i class=\"ti ti-home\"></i>");
        assert_eq!(facts.changelog_href, "/changelog#1.0.0");
    }

    #[test]
    fn bundled_registry_resolves_every_listed_icon() {
        let registry = IconRegistry::bundled();
        for icon in registry.iter() {
            assert_eq!(resolve_icon(registry, &icon.name), IconLookup::Found(icon));
        }
    }
}
