//! Per-label registry of compiled category expressions.

use crate::builtin;
use crate::category::PatternCategory;
use crate::compiled::CompiledPattern;
use crate::errors::PatternError;
use std::collections::HashMap;

/// Compiled expressions for the categories a label uses.
///
/// Built-in expressions are compiled once per process and shared. Custom
/// expressions are compiled on first use and cached by source, including
/// failures, so an invalid pattern is reported once and then ignored.
///
/// # Examples
/// ```
/// use taglabel_patterns::{PatternCategory, PatternRegistry};
/// let mut registry = PatternRegistry::new();
/// assert!(registry.compiled(&PatternCategory::Hash).is_some());
/// assert!(registry.compiled(&PatternCategory::custom("(oops")).is_none());
/// ```
#[derive(Debug, Default)]
pub struct PatternRegistry {
    custom: HashMap<String, Option<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled expression for `category`.
    ///
    /// Returns `None` for a custom category whose source does not compile.
    pub fn compiled(&mut self, category: &PatternCategory) -> Option<&CompiledPattern> {
        let PatternCategory::Custom(source) = category else {
            return builtin::compiled(category.kind());
        };
        if !self.custom.contains_key(source.as_str()) {
            let compiled = CompiledPattern::compile(source)
                .inspect_err(|err| log::warn!("ignoring custom pattern '{source}': {err}"))
                .ok();
            self.custom.insert(source.clone(), compiled);
        }
        self.custom.get(source.as_str()).and_then(Option::as_ref)
    }

    /// Compile and cache a custom pattern eagerly.
    ///
    /// # Errors
    /// Returns the compilation error when `source` is not a valid pattern.
    /// The failure is cached, so later matching skips the pattern silently.
    pub fn register_custom(&mut self, source: &str) -> Result<(), PatternError> {
        let (cached, outcome) = match CompiledPattern::compile(source) {
            Ok(compiled) => (Some(compiled), Ok(())),
            Err(err) => (None, Err(err)),
        };
        self.custom.insert(source.to_owned(), cached);
        outcome
    }

    /// Check that `category` compiles without caching the result.
    ///
    /// # Errors
    /// Returns the compilation error for an invalid custom pattern.
    pub fn validate(category: &PatternCategory) -> Result<(), PatternError> {
        match category {
            PatternCategory::Custom(source) => CompiledPattern::compile(source).map(drop),
            _ => Ok(()),
        }
    }

    /// Number of custom sources seen so far, valid or not.
    #[must_use]
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// Drop cached custom patterns that `enabled` no longer uses.
    pub fn retain_enabled(&mut self, enabled: &[PatternCategory]) {
        let before = self.custom.len();
        self.custom.retain(|source, _| {
            enabled
                .iter()
                .any(|category| matches!(category, PatternCategory::Custom(kept) if kept == source))
        });
        log::debug!(
            "pruned {} unused custom patterns",
            before - self.custom.len()
        );
    }
}
