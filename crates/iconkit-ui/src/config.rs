//! Site configuration consumed by the snippet renderers and metadata panel.
//!
//! # Design
//! - Defaults mirror the bundled `config/site.json`, so a partial document only overrides what it names.
//! - Validation runs once at load; renderers treat the config as trusted.

use iconkit_catalog::DEFAULT_CLASS_PREFIX;
use serde::Deserialize;
use thiserror::Error;

/// Raw site configuration compiled into the bundle.
pub const BUNDLED_SITE_CONFIG: &str = include_str!("../config/site.json");

/// Package names, URLs, and class prefixes used across the icon page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// npm package exporting React components.
    pub react_package: String,
    /// npm package exporting Vue components.
    pub vue_package: String,
    /// Command prefix shown in install snippets.
    pub install_command: String,
    /// Stylesheet URL for the icon webfont.
    pub webfont_stylesheet: String,
    /// Import path for the webfont SCSS entry point.
    pub scss_import: String,
    /// Webfont class prefix (`ti` yields `ti ti-home`).
    pub class_prefix: String,
    /// Path of the changelog page; versions link to `{path}#{version}`.
    pub changelog_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            react_package: "@tabler/icons-react".into(),
            vue_package: "@tabler/icons-vue".into(),
            install_command: "npm install".into(),
            webfont_stylesheet:
                "https://cdn.jsdelivr.net/npm/@tabler/icons-webfont@latest/tabler-icons.min.css"
                    .into(),
            scss_import: "node_modules/@tabler/icons-webfont/tabler-icons.scss".into(),
            class_prefix: DEFAULT_CLASS_PREFIX.into(),
            changelog_path: "/changelog".into(),
        }
    }
}

/// Errors raised while loading [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document was not valid JSON or carried unknown keys.
    #[error("failed to parse site configuration")]
    Parse {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A required field was blank.
    #[error("site configuration field is empty")]
    EmptyField {
        /// Name of the blank field.
        field: &'static str,
    },
    /// A URL-like field did not look like an absolute URL or root path.
    #[error("site configuration field is not a URL")]
    InvalidUrl {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: String,
    },
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// variants for blank or malformed fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration bundled with the app.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`SiteConfig::from_json`].
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_SITE_CONFIG)
    }

    /// Link to the changelog entry for a release.
    #[must_use]
    pub fn changelog_href(&self, version: &str) -> String {
        format!("{}#{version}", self.changelog_path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("react_package", &self.react_package),
            ("vue_package", &self.vue_package),
            ("install_command", &self.install_command),
            ("scss_import", &self.scss_import),
            ("class_prefix", &self.class_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        let urls = [
            ("webfont_stylesheet", &self.webfont_stylesheet),
            ("changelog_path", &self.changelog_path),
        ];
        for (field, value) in urls {
            if !is_url_like(value) {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_url_like(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://") || value.starts_with('/')
}
