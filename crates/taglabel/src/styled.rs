//! Styled text: label text plus tagged, colored attribute runs.
//!
//! Runs stand in for the host toolkit's attributed string. Matching writes
//! category runs through [`AttributeSink`], and tap resolution reads them
//! back through [`AttributeLookup`]. Run ranges are half-open and measured
//! in UTF-16 code units.

use crate::color::Rgba;
use taglabel_patterns::utf16_len;

/// Attribute name of the run carrying the base text color.
///
/// A label covers its whole text with one such run, beneath caller and
/// category runs.
pub const TEXT_COLOR_ATTRIBUTE: &str = "TextColorAttribute";

/// A tagged range of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRun {
    /// Offset of the first covered code unit.
    pub start: usize,
    /// Number of covered code units.
    pub length: usize,
    /// Attribute name, such as `HashtagAttribute`.
    pub name: String,
    /// Attribute value. Category runs store the category's attribute value.
    pub value: String,
    /// Foreground color, when the run sets one.
    pub color: Option<Rgba>,
}

impl AttributeRun {
    /// Build an uncolored run.
    #[must_use]
    pub fn new(
        start: usize,
        length: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            start,
            length,
            name: name.into(),
            value: value.into(),
            color: None,
        }
    }

    /// Set the run's foreground color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns `true` when `offset` falls inside the run.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.start + self.length
    }
}

/// Receives category runs produced by matching.
pub trait AttributeSink {
    /// Apply `run` on top of any existing runs.
    fn apply(&mut self, run: AttributeRun);
}

/// Reads attribute values back from styled text.
pub trait AttributeLookup {
    /// Value of attribute `name` at `offset`, if any run sets it there.
    ///
    /// When several runs overlap, the most recently applied one wins.
    fn attribute_at(&self, name: &str, offset: usize) -> Option<&str>;
}

/// Text with attribute runs layered on top, in application order.
///
/// # Examples
/// ```
/// use taglabel::{AttributeLookup, AttributeRun, AttributeSink, StyledText};
/// let mut styled = StyledText::new("Pay $50");
/// styled.apply(AttributeRun::new(4, 3, "CustomAttribute", r"\$\d+"));
/// assert_eq!(styled.attribute_at("CustomAttribute", 6), Some(r"\$\d+"));
/// assert_eq!(styled.attribute_at("CustomAttribute", 7), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    runs: Vec<AttributeRun>,
}

impl StyledText {
    /// Wrap plain text with no runs.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Add a run, builder style.
    #[must_use]
    pub fn with_run(mut self, run: AttributeRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Access the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Access the runs in application order.
    #[must_use]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Runs carrying attribute `name`.
    pub fn runs_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AttributeRun> {
        self.runs.iter().filter(move |run| run.name == name)
    }

    /// Text length in UTF-16 code units.
    #[must_use]
    pub fn len_utf16(&self) -> usize {
        utf16_len(&self.text)
    }

    /// Returns `true` when the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace every run.
    pub fn set_runs(&mut self, runs: Vec<AttributeRun>) {
        self.runs = runs;
    }

    /// Set the foreground color of every run carrying attribute `name`,
    /// returning how many runs changed.
    pub fn recolor(&mut self, name: &str, color: Rgba) -> usize {
        let mut changed = 0;
        for run in self.runs.iter_mut().filter(|run| run.name == name) {
            run.color = Some(color);
            changed += 1;
        }
        changed
    }

    /// Split into text and runs.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<AttributeRun>) {
        (self.text, self.runs)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AttributeSink for StyledText {
    fn apply(&mut self, run: AttributeRun) {
        self.runs.push(run);
    }
}

impl AttributeLookup for StyledText {
    fn attribute_at(&self, name: &str, offset: usize) -> Option<&str> {
        self.runs
            .iter()
            .rev()
            .find(|run| run.name == name && run.contains(offset))
            .map(|run| run.value.as_str())
    }
}
