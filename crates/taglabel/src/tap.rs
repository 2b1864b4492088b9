//! Resolve a tapped character offset to the categories and keyword it hit,
//! and dispatch the matching callbacks.

use crate::handlers::{TapHandlers, UrlOpener, normalize_url};
use crate::span_index::SpanIndex;
use crate::styled::AttributeLookup;
use taglabel_patterns::PatternCategory;

/// Diagnostic reported when a tapped run has no keyword in the index.
pub const MISSING_KEYWORD: &str = "Keyword is missing!";

/// Outcome of resolving a tap for one enabled category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapEvent {
    /// The category's attribute is present at the offset, but no indexed
    /// keyword covers it.
    MissingKeyword {
        /// Category whose attribute was found.
        category: PatternCategory,
    },
    /// The category's attribute is present and a keyword covers the offset.
    Selected {
        /// Category whose attribute was found.
        category: PatternCategory,
        /// Trimmed matched text.
        keyword: String,
        /// Attribute value stored at the offset.
        attribute_value: String,
    },
}

/// Resolve a tap at `offset` against every enabled category, in list order.
///
/// The keyword is the last index entry whose range contains `offset`
/// (inclusive upper bound). A category takes part when its attribute is set
/// at `offset`; each such category yields one event, so a failure for one
/// category does not stop the others.
///
/// # Examples
/// ```
/// use taglabel::{PatternCategory, SpanIndex, SpanRange, StyledText, AttributeRun, TapEvent, resolve_tap};
/// let mut index = SpanIndex::new();
/// index.insert("#fun", SpanRange::new(0, 4));
/// let styled = StyledText::new("#fun").with_run(AttributeRun::new(0, 4, "HashtagAttribute", "HashtagAttribute"));
/// let events = resolve_tap(2, &[PatternCategory::Hash], &index, &styled);
/// assert!(matches!(&events[..], [TapEvent::Selected { keyword, .. }] if keyword == "#fun"));
/// ```
#[must_use]
pub fn resolve_tap(
    offset: usize,
    categories: &[PatternCategory],
    index: &SpanIndex,
    lookup: &impl AttributeLookup,
) -> Vec<TapEvent> {
    let keyword = index.keyword_at(offset);
    log::trace!("tap at offset {offset} resolved to keyword {keyword:?}");
    categories
        .iter()
        .filter_map(|category| {
            let value = lookup.attribute_at(category.attribute_name(), offset)?;
            Some(keyword.map_or_else(
                || TapEvent::MissingKeyword {
                    category: category.clone(),
                },
                |keyword| TapEvent::Selected {
                    category: category.clone(),
                    keyword: keyword.to_owned(),
                    attribute_value: value.to_owned(),
                },
            ))
        })
        .collect()
}

/// Fire callbacks for resolved tap events, in order.
///
/// Each selection fires `on_pattern_selected` and then its category's
/// callback. URL selections fall back to `opener` without an `on_url`
/// callback. Custom selections only fire `on_custom` when the attribute
/// value at the offset is the category's own pattern, since every custom
/// category shares one attribute name.
pub fn dispatch(events: &[TapEvent], handlers: &mut TapHandlers, opener: &mut dyn UrlOpener) {
    for event in events {
        match event {
            TapEvent::MissingKeyword { category } => {
                log::debug!("tap on {category} run without an indexed keyword");
                handlers.emit_error(MISSING_KEYWORD);
            }
            TapEvent::Selected {
                category,
                keyword,
                attribute_value,
            } => {
                handlers.emit_pattern_selected(keyword, category.kind());
                match category {
                    PatternCategory::Hash => handlers.emit_hashtag(keyword),
                    PatternCategory::Mention => handlers.emit_mention(keyword),
                    PatternCategory::Url => {
                        if !handlers.emit_url(keyword) {
                            opener.open(&normalize_url(keyword));
                        }
                    }
                    PatternCategory::Custom(pattern) => {
                        if attribute_value == pattern {
                            handlers.emit_custom(keyword, pattern);
                        }
                    }
                }
            }
        }
    }
}
