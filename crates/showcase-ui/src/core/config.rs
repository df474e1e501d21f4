//! Configuration for the showcase controllers.
//!
//! # Design
//! - Every field has a default so an empty document is valid.
//! - Unknown fields are rejected rather than silently ignored.

use serde::Deserialize;
use thiserror::Error;

/// Default persisted key for the theme choice.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Default class toggled on the document root while dark mode is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";
/// Default media query describing the OS dark preference.
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
/// Default prefix for generated disclosure identities.
pub const DEFAULT_ID_PREFIX: &str = "accordion-item";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for the expected shape.
    #[error("failed to parse configuration document")]
    Parse {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A field failed validation.
    #[error("invalid value for '{field}' in '{section}': {message}")]
    InvalidField {
        /// Section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: &'static str,
    },
}

/// Top-level configuration document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Theme preference settings.
    pub theme: ThemeSettings,
    /// Disclosure settings.
    pub disclosure: DisclosureSettings,
}

impl ShowcaseConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// The bundled app runs on [`ShowcaseConfig::default`]; embedders that
    /// mount the components under their own key, class or id prefix load
    /// their overrides through this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidField`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.validate()?;
        self.disclosure.validate()
    }
}

/// Where the theme choice is stored and how it is applied.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    /// Persisted key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Class added to the document root while dark mode is active.
    pub dark_class: String,
    /// Media query read once to detect the OS preference.
    pub media_query: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            media_query: DEFAULT_MEDIA_QUERY.to_string(),
        }
    }
}

impl ThemeSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        require_token("theme", "storage_key", &self.storage_key)?;
        require_token("theme", "dark_class", &self.dark_class)?;
        if self.media_query.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                section: "theme",
                field: "media_query",
                message: "must not be empty",
            });
        }
        Ok(())
    }
}

/// Disclosure identity settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisclosureSettings {
    /// Prefix for generated identities.
    pub id_prefix: String,
}

impl Default for DisclosureSettings {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl DisclosureSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        require_token("disclosure", "id_prefix", &self.id_prefix)
    }
}

fn require_token(
    section: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidField {
            section,
            field,
            message: "must not be empty",
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidField {
            section,
            field,
            message: "must not contain whitespace",
        });
    }
    Ok(())
}
