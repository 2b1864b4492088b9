//! Compiled category expressions.

use crate::errors::PatternError;
use regex::RegexBuilder;
use std::ops::Range;

/// A case-insensitive regular expression ready to scan label text.
///
/// Patterns are compiled with the linear-time `regex` engine when possible.
/// Sources using look-around or backreferences fall back to `fancy-regex`,
/// with an inline `(?i)` flag since its builder option does not reach the
/// backtracking engine.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Compiled by the `regex` engine.
    Linear(regex::Regex),
    /// Compiled by `fancy-regex`.
    Backtracking {
        /// The compiled, flag-prefixed expression.
        regex: fancy_regex::Regex,
        /// Source as supplied by the caller.
        source: String,
    },
}

impl CompiledPattern {
    /// Compile `source` case-insensitively.
    ///
    /// # Errors
    /// Returns [`PatternError::EmptyPattern`] for an empty source, and the
    /// engine error when neither engine accepts the pattern.
    ///
    /// # Examples
    /// ```
    /// use taglabel_patterns::CompiledPattern;
    /// let linear = CompiledPattern::compile(r"\$\d+").expect("valid pattern");
    /// assert!(!linear.is_backtracking());
    /// let fancy = CompiledPattern::compile(r"(?<=\.)#abc").expect("valid pattern");
    /// assert!(fancy.is_backtracking());
    /// ```
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        match RegexBuilder::new(source).case_insensitive(true).build() {
            Ok(regex) => Ok(Self::Linear(regex)),
            Err(regex::Error::Syntax(_)) => fancy_regex::Regex::new(&format!("(?i){source}"))
                .map(|regex| Self::Backtracking {
                    regex,
                    source: source.to_owned(),
                })
                .map_err(PatternError::from),
            Err(err) => Err(PatternError::Regex(err)),
        }
    }

    /// Access the pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linear(regex) => regex.as_str(),
            Self::Backtracking { source, .. } => source,
        }
    }

    /// Returns `true` when the pattern needed the backtracking engine.
    #[must_use]
    pub const fn is_backtracking(&self) -> bool {
        matches!(self, Self::Backtracking { .. })
    }

    /// Byte ranges of every non-overlapping match in `text`, left to right.
    ///
    /// A backtracking engine failure, such as hitting the backtrack limit,
    /// ends the scan early and keeps the matches found so far.
    #[must_use]
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Self::Linear(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
            Self::Backtracking { regex, source } => {
                let mut ranges = Vec::new();
                for found in regex.find_iter(text) {
                    match found {
                        Ok(m) => ranges.push(m.start()..m.end()),
                        Err(err) => {
                            log::warn!(
                                "stopped matching pattern '{source}' after {} matches: {err}",
                                ranges.len()
                            );
                            break;
                        }
                    }
                }
                ranges
            }
        }
    }
}
