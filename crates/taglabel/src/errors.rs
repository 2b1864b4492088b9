//! Errors raised while loading label configuration.

use thiserror::Error;

/// Errors surfaced while parsing a [`LabelConfig`](crate::LabelConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid configuration JSON.
    #[cfg(feature = "serde")]
    #[error("invalid label configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A configured custom pattern failed to compile.
    #[error("invalid custom pattern '{pattern}': {source}")]
    Pattern {
        /// Source string of the rejected pattern.
        pattern: String,
        /// Compilation failure.
        #[source]
        source: taglabel_patterns::PatternError,
    },
}
