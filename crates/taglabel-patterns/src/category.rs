//! Pattern categories a label can be configured to detect.
//!
//! [`PatternCategory`] identifies a concrete detector, including the source
//! string of custom patterns. [`PatternKind`] drops that payload and is used
//! wherever only the kind of detector matters, such as the "any pattern
//! selected" callback.

use crate::builtin;
use std::fmt;
use std::str::FromStr;

/// Attribute name tagging hashtag runs.
pub const HASH_ATTRIBUTE: &str = "HashtagAttribute";
/// Attribute name tagging mention runs.
pub const MENTION_ATTRIBUTE: &str = "MentionAttribute";
/// Attribute name tagging URL runs.
pub const URL_ATTRIBUTE: &str = "URLAttribute";
/// Attribute name shared by every custom pattern run.
pub const CUSTOM_ATTRIBUTE: &str = "CustomAttribute";

/// A detector enabled on a label.
///
/// Equality compares the custom pattern string, so two custom categories
/// with different sources are distinct.
///
/// # Examples
/// ```
/// use taglabel_patterns::PatternCategory;
/// let dollars = PatternCategory::custom(r"\$\d+");
/// assert_eq!(dollars, PatternCategory::custom(r"\$\d+"));
/// assert_ne!(dollars, PatternCategory::custom(r"€\d+"));
/// assert_eq!(dollars.attribute_value(), r"\$\d+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PatternCategory {
    /// `#tag` words.
    Hash,
    /// `@user` words.
    Mention,
    /// Links starting with a scheme, `www.` or `pic.`.
    Url,
    /// A caller-supplied regular expression.
    Custom(String),
}

impl PatternCategory {
    /// Build a custom category from a regular-expression source.
    #[must_use]
    pub fn custom(pattern: impl Into<String>) -> Self {
        Self::Custom(pattern.into())
    }

    /// The categories enabled on a fresh label.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::Hash, Self::Mention, Self::Url]
    }

    /// Return the kind of this category, ignoring any custom payload.
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::Hash => PatternKind::Hash,
            Self::Mention => PatternKind::Mention,
            Self::Url => PatternKind::Url,
            Self::Custom(_) => PatternKind::Custom,
        }
    }

    /// Attribute name used to tag runs produced by this category.
    #[must_use]
    pub const fn attribute_name(&self) -> &'static str {
        self.kind().attribute_name()
    }

    /// Attribute value stored on runs produced by this category.
    ///
    /// Custom categories store their pattern source so runs from different
    /// custom patterns can be told apart under the shared attribute name.
    #[must_use]
    pub fn attribute_value(&self) -> &str {
        match self {
            Self::Custom(pattern) => pattern,
            other => other.attribute_name(),
        }
    }

    /// Regular-expression source matched for this category.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Hash => builtin::HASH_SOURCE,
            Self::Mention => builtin::MENTION_SOURCE,
            Self::Url => builtin::URL_SOURCE,
            Self::Custom(pattern) => pattern,
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(pattern) => write!(f, "custom({pattern})"),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// Kind of a [`PatternCategory`] without the custom payload.
///
/// Comparing a kind with a category only looks at the kind, so
/// `PatternKind::Custom` equals every custom category.
///
/// # Examples
/// ```
/// use taglabel_patterns::{PatternCategory, PatternKind};
/// assert_eq!(PatternKind::Custom, PatternCategory::custom("a+"));
/// assert_eq!(PatternKind::Custom, PatternCategory::custom("b+"));
/// assert_ne!(PatternKind::Hash, PatternCategory::Url);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PatternKind {
    /// Hashtags.
    Hash,
    /// Mentions.
    Mention,
    /// URLs.
    Url,
    /// Any custom pattern.
    Custom,
}

impl PatternKind {
    /// Every kind, in the order the built-in defaults are listed.
    pub const ALL: [Self; 4] = [Self::Hash, Self::Mention, Self::Url, Self::Custom];

    /// Return the kind as a lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Mention => "mention",
            Self::Url => "url",
            Self::Custom => "custom",
        }
    }

    /// Attribute name used to tag runs of this kind.
    #[must_use]
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::Hash => HASH_ATTRIBUTE,
            Self::Mention => MENTION_ATTRIBUTE,
            Self::Url => URL_ATTRIBUTE,
            Self::Custom => CUSTOM_ATTRIBUTE,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<PatternCategory> for PatternKind {
    fn eq(&self, other: &PatternCategory) -> bool {
        *self == other.kind()
    }
}

impl PartialEq<PatternKind> for PatternCategory {
    fn eq(&self, other: &PatternKind) -> bool {
        self.kind() == *other
    }
}

/// Error returned when parsing a [`PatternKind`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternKindParseError(pub String);

impl fmt::Display for PatternKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern kind: {}", self.0)
    }
}

impl std::error::Error for PatternKindParseError {}

impl FromStr for PatternKind {
    type Err = PatternKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| trimmed.eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| PatternKindParseError(trimmed.to_string()))
    }
}
