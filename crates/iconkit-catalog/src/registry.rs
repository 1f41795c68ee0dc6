//! Name-indexed icon registry.
//!
//! # Design
//! - The registry is built once from JSON and never mutated afterwards.
//! - Validation happens at load time so lookups can stay infallible.
//! - Iteration order is the slug order, which keeps listings stable.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::{debug, error};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Icon, StoredIcon};

const BUNDLED_ICONS: &str = include_str!("../data/icons.json");
const MAX_CODEPOINT_DIGITS: usize = 6;

static BUNDLED: LazyLock<IconRegistry> = LazyLock::new(|| {
    IconRegistry::from_json(BUNDLED_ICONS).unwrap_or_else(|err| {
        error!(error = %err, detail = ?err, "bundled icon registry failed to load");
        IconRegistry::default()
    })
});

/// Read-only mapping from icon slug to [`Icon`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRegistry {
    icons: BTreeMap<String, Icon>,
}

impl IconRegistry {
    /// Registry compiled into the binary from `data/icons.json`.
    ///
    /// A malformed bundle is logged and yields an empty registry, so every
    /// lookup then reports the icon as missing.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    /// Parse and validate a registry document keyed by icon name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and one of the
    /// validation variants for the first invalid icon encountered.
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let stored: BTreeMap<String, StoredIcon> = serde_json::from_str(raw)?;
        let icons = stored
            .into_iter()
            .map(|(name, stored)| {
                let icon = stored.into_icon(name);
                validate(&icon)?;
                Ok((icon.name.clone(), icon))
            })
            .collect::<CatalogResult<BTreeMap<_, _>>>()?;
        debug!(icons = icons.len(), "icon registry loaded");
        Ok(Self { icons })
    }

    /// Build a registry from already-constructed icons.
    ///
    /// Later icons replace earlier ones with the same name.
    ///
    /// # Errors
    ///
    /// Returns the validation error for the first invalid icon.
    pub fn from_icons(icons: impl IntoIterator<Item = Icon>) -> CatalogResult<Self> {
        let mut map = BTreeMap::new();
        for icon in icons {
            validate(&icon)?;
            map.insert(icon.name.clone(), icon);
        }
        Ok(Self { icons: map })
    }

    /// Exact-match lookup by slug.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }

    /// Whether an icon with this slug exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Icons in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.values()
    }

    /// Number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the registry holds no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

fn validate(icon: &Icon) -> CatalogResult<()> {
    if !is_slug(&icon.name) {
        return Err(CatalogError::InvalidName {
            name: icon.name.clone(),
        });
    }
    let unicode = icon.unicode.as_str();
    if unicode.is_empty()
        || unicode.len() > MAX_CODEPOINT_DIGITS
        || !unicode.chars().all(|ch| ch.is_ascii_hexdigit())
    {
        return Err(CatalogError::InvalidUnicode {
            name: icon.name.clone(),
            value: icon.unicode.clone(),
        });
    }
    if !icon.svg.trim_start().starts_with("<svg") {
        return Err(CatalogError::InvalidSvg {
            name: icon.name.clone(),
        });
    }
    Ok(())
}

fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(name: &str, unicode: &str) -> Icon {
        Icon {
            name: name.into(),
            svg: "<svg></svg>".into(),
            unicode: unicode.into(),
            category: String::new(),
            tags: Vec::new(),
            version: "1.0".into(),
        }
    }

    #[test]
    fn bundled_registry_contains_home() {
        let registry = IconRegistry::bundled();
        assert!(!registry.is_empty());
        let home = registry.get("home").expect("home icon bundled");
        assert_eq!(home.unicode, "eac1");
        assert!(home.svg.starts_with("<svg"));
    }

    #[test]
    fn bundled_icons_are_sorted_by_name() {
        let names: Vec<&str> = IconRegistry::bundled()
            .iter()
            .map(|icon| icon.name.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn lookup_is_exact_match() {
        let registry = IconRegistry::from_icons([icon("home", "eac1")]).expect("valid");
        assert!(registry.contains("home"));
        assert!(registry.get("Home").is_none());
        assert!(registry.get("home ").is_none());
        assert!(registry.get("hom").is_none());
    }

    #[test]
    fn slug_rules_reject_uppercase_and_edges() {
        assert!(is_slug("arrow-left"));
        assert!(is_slug("2fa"));
        assert!(!is_slug(""));
        assert!(!is_slug("Arrow"));
        assert!(!is_slug("-arrow"));
        assert!(!is_slug("arrow-"));
        assert!(!is_slug("arrow left"));
    }

    #[test]
    fn unicode_must_be_short_hex() {
        assert!(matches!(
            IconRegistry::from_icons([icon("home", "zz01")]),
            Err(CatalogError::InvalidUnicode { .. })
        ));
        assert!(matches!(
            IconRegistry::from_icons([icon("home", "1234567")]),
            Err(CatalogError::InvalidUnicode { .. })
        ));
        assert!(matches!(
            IconRegistry::from_icons([icon("home", "")]),
            Err(CatalogError::InvalidUnicode { .. })
        ));
    }

    #[test]
    fn later_icons_replace_earlier_ones() {
        let registry =
            IconRegistry::from_icons([icon("home", "eac1"), icon("home", "eac2")]).expect("valid");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("home").map(|i| i.unicode.as_str()), Some("eac2"));
    }
}
