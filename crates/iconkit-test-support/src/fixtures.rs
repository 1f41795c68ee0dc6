//! Sample icons and registries.

use iconkit_catalog::{Icon, IconRegistry};

/// Minimal registry document with two icons.
pub const SAMPLE_REGISTRY_JSON: &str = r#"{
  "home": {
    "svg": "<svg xmlns=\"http://www.w3.org/2000/svg\" stroke-width=\"2\"><path d=\"M5 12l-2 0l9 -9l9 9l-2 0\" /></svg>",
    "unicode": "eac1",
    "category": "Buildings",
    "tags": ["house", "dashboard", "living", "building"],
    "version": "1.0.0"
  },
  "arrow-left": {
    "svg": "<svg xmlns=\"http://www.w3.org/2000/svg\" stroke-width=\"2\"><path d=\"M5 12l14 0\" /></svg>",
    "unicode": "ea19",
    "category": "Arrows",
    "tags": ["prev", "back"],
    "version": "1.0.0"
  }
}"#;

/// The `home` icon as stored in [`SAMPLE_REGISTRY_JSON`].
#[must_use]
pub fn home_icon() -> Icon {
    Icon {
        name: "home".into(),
        svg: "<svg xmlns=\"http://www.w3.org/2000/svg\" stroke-width=\"2\"><path d=\"M5 12l-2 0l9 -9l9 9l-2 0\" /></svg>".into(),
        unicode: "eac1".into(),
        category: "Buildings".into(),
        tags: vec![
            "house".into(),
            "dashboard".into(),
            "living".into(),
            "building".into(),
        ],
        version: "1.0.0".into(),
    }
}

/// The `arrow-left` icon as stored in [`SAMPLE_REGISTRY_JSON`].
#[must_use]
pub fn arrow_left_icon() -> Icon {
    Icon {
        name: "arrow-left".into(),
        svg: "<svg xmlns=\"http://www.w3.org/2000/svg\" stroke-width=\"2\"><path d=\"M5 12l14 0\" /></svg>".into(),
        unicode: "ea19".into(),
        category: "Arrows".into(),
        tags: vec!["prev".into(), "back".into()],
        version: "1.0.0".into(),
    }
}

/// Registry parsed from [`SAMPLE_REGISTRY_JSON`].
///
/// # Panics
///
/// Panics if the fixture document stops validating.
#[must_use]
pub fn sample_registry() -> IconRegistry {
    match IconRegistry::from_json(SAMPLE_REGISTRY_JSON) {
        Ok(registry) => registry,
        Err(err) => panic!("sample registry fixture is invalid: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_icons_match_document() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("home"), Some(&home_icon()));
        assert_eq!(registry.get("arrow-left"), Some(&arrow_left_icon()));
    }
}
