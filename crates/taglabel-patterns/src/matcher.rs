//! Run enabled category expressions over label text.

use crate::category::PatternCategory;
use crate::compiled::CompiledPattern;
use crate::offsets::Utf16Cursor;
use crate::registry::PatternRegistry;

/// A single match, positioned in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    /// Offset of the first matched code unit.
    pub start: usize,
    /// Number of matched code units.
    pub length: usize,
    /// The raw matched substring, including any leading whitespace the
    /// expression consumed.
    pub text: String,
}

impl CategoryMatch {
    /// Offset one past the last matched code unit.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Matches found for one enabled category, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatches {
    /// Category whose expression produced the matches.
    pub category: PatternCategory,
    /// Non-overlapping matches, left to right.
    pub matches: Vec<CategoryMatch>,
}

/// Run each category in `categories` over `text`, in list order.
///
/// Every category yields one entry, so duplicates in the list are scanned
/// again. A custom category that fails to compile yields an empty entry.
/// Empty text yields no entries at all.
///
/// # Examples
/// ```
/// use taglabel_patterns::{PatternCategory, PatternRegistry, find_matches};
/// let mut registry = PatternRegistry::new();
/// let found = find_matches(
///     &mut registry,
///     "Hello @world, check #fun!",
///     &[PatternCategory::Hash, PatternCategory::Mention],
/// );
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].matches[0].text, " #fun");
/// assert_eq!(found[1].matches[0].start, 5);
/// ```
pub fn find_matches(
    registry: &mut PatternRegistry,
    text: &str,
    categories: &[PatternCategory],
) -> Vec<CategoryMatches> {
    if text.is_empty() {
        return Vec::new();
    }
    categories
        .iter()
        .map(|category| CategoryMatches {
            category: category.clone(),
            matches: registry
                .compiled(category)
                .map(|pattern| match_pattern(pattern, text))
                .unwrap_or_default(),
        })
        .collect()
}

fn match_pattern(pattern: &CompiledPattern, text: &str) -> Vec<CategoryMatch> {
    let mut cursor = Utf16Cursor::new(text);
    pattern
        .find_ranges(text)
        .into_iter()
        .filter_map(|range| {
            let raw = text.get(range.clone())?;
            let start = cursor.advance_to(range.start);
            let end = cursor.advance_to(range.end);
            Some(CategoryMatch {
                start,
                length: end - start,
                text: raw.to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(found: &CategoryMatches) -> Vec<(usize, usize, &str)> {
        found
            .matches
            .iter()
            .map(|m| (m.start, m.length, m.text.as_str()))
            .collect()
    }

    #[test]
    fn empty_text_has_no_matches() {
        let mut registry = PatternRegistry::new();
        assert!(find_matches(&mut registry, "", &PatternCategory::defaults()).is_empty());
    }

    #[test]
    fn empty_category_list_has_no_matches() {
        let mut registry = PatternRegistry::new();
        assert!(find_matches(&mut registry, "#tag", &[]).is_empty());
    }

    #[test]
    fn keeps_category_order_and_duplicates() {
        let mut registry = PatternRegistry::new();
        let found = find_matches(
            &mut registry,
            "#a @b",
            &[
                PatternCategory::Mention,
                PatternCategory::Hash,
                PatternCategory::Mention,
            ],
        );
        let order: Vec<_> = found.iter().map(|f| f.category.clone()).collect();
        assert_eq!(
            order,
            vec![
                PatternCategory::Mention,
                PatternCategory::Hash,
                PatternCategory::Mention
            ]
        );
        assert_eq!(found.first(), found.get(2));
    }

    #[test]
    fn invalid_custom_pattern_contributes_nothing() {
        let mut registry = PatternRegistry::new();
        let found = find_matches(
            &mut registry,
            "#tag (x",
            &[PatternCategory::custom("(x"), PatternCategory::Hash],
        );
        assert_eq!(found.len(), 2);
        assert!(found.first().is_some_and(|f| f.matches.is_empty()));
        assert!(found.get(1).is_some_and(|f| f.matches.len() == 1));
    }

    #[test]
    fn reports_utf16_offsets() {
        let mut registry = PatternRegistry::new();
        let found = find_matches(&mut registry, "👋 #hi #yo", &[PatternCategory::Hash]);
        let Some(hashes) = found.first() else {
            panic!("hash category should be reported");
        };
        assert_eq!(spans(hashes), vec![(2, 4, " #hi"), (6, 4, " #yo")]);
    }

    #[test]
    fn finds_custom_matches_in_order() {
        let mut registry = PatternRegistry::new();
        let found = find_matches(
            &mut registry,
            "Pay $50 or $7",
            &[PatternCategory::custom(r"\$\d+")],
        );
        let Some(dollars) = found.first() else {
            panic!("custom category should be reported");
        };
        assert_eq!(spans(dollars), vec![(4, 3, "$50"), (11, 2, "$7")]);
        assert!(dollars.matches.iter().all(|m| m.end() == m.start + m.length));
    }
}
