//! Label configuration.
//!
//! A [`LabelConfig`] seeds a new [`TagLabel`](crate::TagLabel): the enabled
//! categories, the palette, and an optional cap on how much text is scanned.
//! The cap falls back to the `TAGLABEL_MAX_SCAN_LEN` environment variable
//! when the config leaves it unset.

use crate::color::ColorPalette;
use crate::errors::ConfigError;
use taglabel_patterns::{PatternCategory, PatternRegistry};

/// Environment variable consulted when no scan cap is configured.
pub const MAX_SCAN_LEN_ENV: &str = "TAGLABEL_MAX_SCAN_LEN";

fn parse_env_len(value: &str) -> Option<usize> {
    match value.trim() {
        "" | "0" | "none" | "off" => None,
        other => other.parse().ok(),
    }
}

fn env_max_scan_len() -> Option<usize> {
    std::env::var(MAX_SCAN_LEN_ENV)
        .ok()
        .as_deref()
        .and_then(parse_env_len)
}

/// Settings applied when a label is created.
///
/// # Examples
/// ```
/// use taglabel::{LabelConfig, PatternCategory};
/// let config = LabelConfig::default();
/// assert_eq!(config.enabled, PatternCategory::defaults());
/// assert_eq!(config.max_scan_len, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LabelConfig {
    /// Categories detected, in processing order.
    pub enabled: Vec<PatternCategory>,
    /// Run colors.
    pub palette: ColorPalette,
    /// Texts longer than this many UTF-16 code units are shown unscanned.
    pub max_scan_len: Option<usize>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: PatternCategory::defaults(),
            palette: ColorPalette::default(),
            max_scan_len: None,
        }
    }
}

impl LabelConfig {
    /// Parse a JSON document and validate its custom patterns.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::Pattern`] when a custom pattern does not compile.
    ///
    /// # Examples
    /// ```
    /// use taglabel::{LabelConfig, PatternCategory};
    /// let config = LabelConfig::from_json(r#"{"enabled": ["hash", {"custom": "\\$\\d+"}]}"#)?;
    /// assert_eq!(
    ///     config.enabled,
    ///     vec![PatternCategory::Hash, PatternCategory::custom(r"\$\d+")]
    /// );
    /// # Ok::<(), taglabel::ConfigError>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every custom category compiles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] for the first failing pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in &self.enabled {
            PatternRegistry::validate(category).map_err(|source| ConfigError::Pattern {
                pattern: category.source().to_owned(),
                source,
            })?;
        }
        Ok(())
    }

    /// Scan cap in effect: the configured value, else the environment.
    #[must_use]
    pub fn effective_max_scan_len(&self) -> Option<usize> {
        self.max_scan_len.or_else(env_max_scan_len)
    }
}
