//! The label controller.
//!
//! [`TagLabel`] owns the text, the enabled categories and everything derived
//! from them. Any change to the text or the categories rescans the text,
//! rebuilds the [`SpanIndex`] and reapplies colored category runs, unless
//! the change happens inside [`TagLabel::edit`], which defers the rebuild
//! until the batch ends.

use crate::color::{ColorPalette, Rgba};
use crate::config::LabelConfig;
use crate::handlers::{SystemUrlOpener, TapHandlers, UrlOpener};
use crate::layout::{Point, TextLayout};
use crate::span_index::SpanIndex;
use crate::styled::{AttributeRun, AttributeSink, StyledText, TEXT_COLOR_ATTRIBUTE};
use crate::tap::{dispatch, resolve_tap};
use std::fmt;
use taglabel_patterns::{PatternCategory, PatternError, PatternKind, PatternRegistry, find_matches};

/// A label that highlights hashtags, mentions, URLs and custom patterns
/// and turns taps on them into callbacks.
///
/// # Examples
/// ```
/// use taglabel::{PatternCategory, SpanRange, TagLabel};
/// let mut label = TagLabel::default();
/// label.set_enabled_categories(vec![PatternCategory::Hash, PatternCategory::Mention]);
/// label.set_text("Hello @world, check #fun!");
/// assert_eq!(label.span_index().get("@world"), Some(SpanRange::new(5, 7)));
/// assert_eq!(label.span_index().get("#fun"), Some(SpanRange::new(19, 5)));
/// ```
pub struct TagLabel {
    styled: StyledText,
    base_runs: Vec<AttributeRun>,
    enabled: Vec<PatternCategory>,
    registry: PatternRegistry,
    index: SpanIndex,
    palette: ColorPalette,
    max_scan_len: Option<usize>,
    origin: Point,
    batch_depth: usize,
    stale: bool,
    opener: Box<dyn UrlOpener>,
}

impl TagLabel {
    /// Create an empty label from `config`.
    ///
    /// Custom categories in the config are not validated here; one that
    /// fails to compile simply never matches. Use
    /// [`LabelConfig::validate`] to check them up front.
    #[must_use]
    pub fn new(config: LabelConfig) -> Self {
        let max_scan_len = config.effective_max_scan_len();
        Self {
            styled: StyledText::default(),
            base_runs: Vec::new(),
            enabled: config.enabled,
            registry: PatternRegistry::new(),
            index: SpanIndex::new(),
            palette: config.palette,
            max_scan_len,
            origin: Point::default(),
            batch_depth: 0,
            stale: false,
            opener: Box::new(SystemUrlOpener),
        }
    }

    /// Replace the action taken for URL taps without an `on_url` callback.
    #[must_use]
    pub fn with_url_opener(mut self, opener: impl UrlOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Replace the text with plain, unstyled text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.styled = StyledText::new(text);
        self.base_runs.clear();
        self.refresh();
    }

    /// Replace the text with pre-styled text.
    ///
    /// The supplied runs are kept underneath the category runs across
    /// rebuilds, until the enabled categories change.
    pub fn set_styled_text(&mut self, styled: StyledText) {
        let (text, runs) = styled.into_parts();
        self.styled = StyledText::new(text);
        self.base_runs = runs;
        self.refresh();
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.styled.text()
    }

    /// Current text with caller and category runs applied.
    #[must_use]
    pub const fn styled_text(&self) -> &StyledText {
        &self.styled
    }

    /// Replace the enabled categories.
    ///
    /// This resets every attribute on the text, including runs supplied
    /// through [`set_styled_text`](Self::set_styled_text), and forgets
    /// compiled custom patterns that are no longer enabled.
    pub fn set_enabled_categories(&mut self, categories: Vec<PatternCategory>) {
        self.enabled = categories;
        self.registry.retain_enabled(&self.enabled);
        self.base_runs.clear();
        self.refresh();
    }

    /// Enabled categories in processing order.
    #[must_use]
    pub fn enabled_categories(&self) -> &[PatternCategory] {
        &self.enabled
    }

    /// Compile `pattern` and append it as a custom category.
    ///
    /// Like any change to the enabled categories, this resets caller runs.
    ///
    /// # Errors
    /// Returns the compilation error and leaves the label untouched when
    /// `pattern` is empty or invalid.
    ///
    /// # Examples
    /// ```
    /// use taglabel::{SpanRange, TagLabel};
    /// let mut label = TagLabel::default();
    /// label.add_custom_pattern(r"\$\d+")?;
    /// label.set_text("Pay $50 now");
    /// assert_eq!(label.span_index().get("$50"), Some(SpanRange::new(4, 3)));
    /// assert!(label.add_custom_pattern("(").is_err());
    /// # Ok::<(), taglabel::PatternError>(())
    /// ```
    pub fn add_custom_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        self.registry.register_custom(pattern)?;
        self.enabled.push(PatternCategory::custom(pattern));
        self.base_runs.clear();
        self.refresh();
        Ok(())
    }

    /// Apply several changes with a single rebuild at the end.
    ///
    /// Nested batches rebuild once, when the outermost batch ends.
    ///
    /// # Examples
    /// ```
    /// use taglabel::{PatternCategory, TagLabel};
    /// let mut label = TagLabel::default();
    /// label.edit(|label| {
    ///     label.set_text("ping @ops");
    ///     label.set_enabled_categories(vec![PatternCategory::Mention]);
    ///     assert!(label.span_index().is_empty());
    /// });
    /// assert!(label.span_index().get("@ops").is_some());
    /// ```
    pub fn edit(&mut self, changes: impl FnOnce(&mut Self)) {
        self.batch_depth += 1;
        changes(self);
        self.batch_depth -= 1;
        if self.batch_depth == 0 && self.stale {
            self.refresh();
        }
    }

    /// Change the color of one pattern kind and recolor its existing runs.
    pub fn set_color(&mut self, kind: PatternKind, color: Rgba) {
        self.palette.set(kind, color);
        let changed = self.styled.recolor(kind.attribute_name(), color);
        log::debug!("recolored {changed} {kind} runs");
    }

    /// Change the color of text outside highlighted runs.
    ///
    /// # Examples
    /// ```
    /// use taglabel::{Rgba, TagLabel, TEXT_COLOR_ATTRIBUTE};
    /// let mut label = TagLabel::default();
    /// label.set_text("plain #tag");
    /// label.set_text_color(Rgba::rgb(1, 2, 3));
    /// let base: Vec<_> = label.styled_text().runs_named(TEXT_COLOR_ATTRIBUTE).collect();
    /// assert_eq!(base.len(), 1);
    /// assert_eq!(base[0].color, Some(Rgba::rgb(1, 2, 3)));
    /// ```
    pub fn set_text_color(&mut self, color: Rgba) {
        self.palette.text = color;
        self.styled.recolor(TEXT_COLOR_ATTRIBUTE, color);
    }

    /// This label's palette.
    #[must_use]
    pub const fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Keyword ranges from the last rebuild.
    #[must_use]
    pub const fn span_index(&self) -> &SpanIndex {
        &self.index
    }

    /// Set where the text's frame starts inside the label.
    ///
    /// Tap points passed to [`handle_tap`](Self::handle_tap) are translated
    /// by this origin before hit testing.
    pub fn set_text_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Resolve a tap at a UTF-16 character offset and fire callbacks.
    ///
    /// `on_label_tapped` always fires first. Nothing else fires when the
    /// label has no highlighted keyword or `offset` lies past the text.
    pub fn tap_at_offset(&mut self, offset: usize, handlers: &mut TapHandlers) {
        handlers.emit_label_tapped(self);
        if self.index.is_empty() || offset >= self.styled.len_utf16() {
            return;
        }
        let events = resolve_tap(offset, &self.enabled, &self.index, &self.styled);
        dispatch(&events, handlers, self.opener.as_mut());
    }

    /// Resolve a tap at `point` in label coordinates.
    ///
    /// A point that `layout` cannot place in the text only fires
    /// `on_label_tapped`.
    pub fn handle_tap(&mut self, point: Point, layout: &dyn TextLayout, handlers: &mut TapHandlers) {
        let Some(offset) = layout.offset_at(point.relative_to(self.origin)) else {
            handlers.emit_label_tapped(self);
            return;
        };
        self.tap_at_offset(offset, handlers);
    }

    fn refresh(&mut self) {
        if self.batch_depth > 0 {
            self.stale = true;
            return;
        }
        self.stale = false;
        self.index.clear();
        if self.styled.is_empty() {
            self.styled.set_runs(self.base_runs.clone());
            return;
        }
        let len = self.styled.len_utf16();
        let mut runs = Vec::with_capacity(self.base_runs.len() + 1);
        runs.push(
            AttributeRun::new(0, len, TEXT_COLOR_ATTRIBUTE, TEXT_COLOR_ATTRIBUTE)
                .with_color(self.palette.text),
        );
        runs.extend(self.base_runs.iter().cloned());
        self.styled.set_runs(runs);
        if self.max_scan_len.is_some_and(|cap| len > cap) {
            log::warn!("skipping highlight scan of {len} code units over the configured limit");
            return;
        }
        let found = find_matches(&mut self.registry, self.styled.text(), &self.enabled);
        for result in &found {
            let category = &result.category;
            let color = self.palette.color_for(category.kind());
            for matched in &result.matches {
                self.styled.apply(
                    AttributeRun::new(
                        matched.start,
                        matched.length,
                        category.attribute_name(),
                        category.attribute_value(),
                    )
                    .with_color(color),
                );
            }
        }
        self.index = SpanIndex::build(&found);
    }
}

impl Default for TagLabel {
    fn default() -> Self {
        Self::new(LabelConfig::default())
    }
}

impl fmt::Debug for TagLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLabel")
            .field("styled", &self.styled)
            .field("enabled", &self.enabled)
            .field("registry", &self.registry)
            .field("index", &self.index)
            .field("palette", &self.palette)
            .field("max_scan_len", &self.max_scan_len)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
