//! Index from matched keywords to their ranges in the label text.
//!
//! The index is keyed by the trimmed matched text. A later match that trims
//! to the same text replaces the earlier range, so repeated keywords only
//! remember their last occurrence. Empty keys are kept as-is, which makes
//! every match that trims to nothing share the `""` entry.

use hashbrown::HashMap;
use taglabel_patterns::CategoryMatches;

/// Range of a raw match in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanRange {
    /// Offset of the first matched code unit.
    pub start: usize,
    /// Number of matched code units.
    pub length: usize,
}

impl SpanRange {
    /// Build a range.
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Offset one past the last matched code unit.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.length
    }

    /// Returns `true` when a tap at `offset` hits this range.
    ///
    /// The upper bound is inclusive: the offset just past the last matched
    /// code unit still counts as a hit.
    ///
    /// # Examples
    /// ```
    /// use taglabel::SpanRange;
    /// let range = SpanRange::new(19, 5);
    /// assert!(range.contains(19));
    /// assert!(range.contains(24));
    /// assert!(!range.contains(25));
    /// ```
    #[must_use]
    pub const fn contains(self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end()
    }
}

/// Keyword → range mapping rebuilt from match results.
///
/// Entries are scanned in the order their keys were first inserted;
/// replacing a key's range keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanIndex {
    entries: Vec<(String, SpanRange)>,
    slots: HashMap<String, usize>,
}

impl SpanIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from match results in processing order.
    ///
    /// # Examples
    /// ```
    /// use taglabel::{PatternCategory, PatternRegistry, SpanIndex, SpanRange, find_matches};
    /// let mut registry = PatternRegistry::new();
    /// let found = find_matches(
    ///     &mut registry,
    ///     "Hello @world, check #fun!",
    ///     &[PatternCategory::Hash, PatternCategory::Mention],
    /// );
    /// let index = SpanIndex::build(&found);
    /// assert_eq!(index.get("@world"), Some(SpanRange::new(5, 7)));
    /// assert_eq!(index.get("#fun"), Some(SpanRange::new(19, 5)));
    /// ```
    #[must_use]
    pub fn build(results: &[CategoryMatches]) -> Self {
        let mut index = Self::new();
        for result in results {
            for found in &result.matches {
                index.insert(found.text.trim(), SpanRange::new(found.start, found.length));
            }
        }
        log::debug!(
            "built span index with {} keywords from {} categories",
            index.len(),
            results.len()
        );
        index
    }

    /// Map `keyword` to `range`, returning the range it replaced.
    pub fn insert(&mut self, keyword: &str, range: SpanRange) -> Option<SpanRange> {
        if let Some(entry) = self
            .slots
            .get(keyword)
            .copied()
            .and_then(|slot| self.entries.get_mut(slot))
        {
            return Some(std::mem::replace(&mut entry.1, range));
        }
        self.slots.insert(keyword.to_owned(), self.entries.len());
        self.entries.push((keyword.to_owned(), range));
        None
    }

    /// Range recorded for `keyword`.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<SpanRange> {
        let slot = *self.slots.get(keyword)?;
        self.entries.get(slot).map(|(_, range)| *range)
    }

    /// Keyword whose range contains `offset`.
    ///
    /// Overlapping ranges only arise across categories; the last entry in
    /// scan order that contains the offset wins.
    #[must_use]
    pub fn keyword_at(&self, offset: usize) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(_, range)| range.contains(offset))
            .map(|(keyword, _)| keyword.as_str())
    }

    /// Iterate entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SpanRange)> {
        self.entries
            .iter()
            .map(|(keyword, range)| (keyword.as_str(), *range))
    }

    /// Number of distinct keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no keyword is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }
}
