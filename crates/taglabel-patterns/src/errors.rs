//! Error types raised while compiling category patterns.

use thiserror::Error;

/// Errors surfaced while compiling a category's regular expression.
///
/// # Examples
/// ```
/// use taglabel_patterns::{CompiledPattern, PatternError};
/// let err = CompiledPattern::compile("").unwrap_err();
/// assert!(matches!(err, PatternError::EmptyPattern));
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// A custom pattern was registered with an empty source string.
    #[error("custom pattern is empty")]
    EmptyPattern,
    /// The `regex` engine rejected the pattern for a reason other than
    /// unsupported syntax, such as exceeding the compiled size limit.
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// Neither engine could parse the pattern.
    #[error(transparent)]
    Backtracking(Box<fancy_regex::Error>),
}

impl From<fancy_regex::Error> for PatternError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Backtracking(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_empty_pattern() {
        assert_eq!(PatternError::EmptyPattern.to_string(), "custom pattern is empty");
    }

    #[test]
    fn forwards_regex_error_display() {
        let err = PatternError::Regex(regex::Error::Syntax("bad".into()));
        assert_eq!(
            err.to_string(),
            regex::Error::Syntax("bad".into()).to_string()
        );
    }

    #[test]
    fn boxes_backtracking_errors() {
        let Err(source) = fancy_regex::Regex::new("(unclosed") else {
            panic!("unbalanced group should not parse");
        };
        let message = source.to_string();
        let err = PatternError::from(source);
        assert!(matches!(err, PatternError::Backtracking(_)));
        assert_eq!(err.to_string(), message);
    }
}
