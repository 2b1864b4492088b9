//! Tap callbacks and the default URL action.
//!
//! Every callback is optional; an unset callback is a no-op. URL taps are
//! the exception: without an `on_url` callback the label hands the URL to
//! its [`UrlOpener`].

use crate::label::TagLabel;
use std::borrow::Cow;
use std::fmt;
use taglabel_patterns::PatternKind;

type KeywordFn = Box<dyn FnMut(&str)>;

/// Optional callbacks fired when a label is tapped.
///
/// # Examples
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use taglabel::{TagLabel, TapHandlers};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut handlers = TapHandlers::new().on_hashtag(move |tag| sink.borrow_mut().push(tag.to_owned()));
///
/// let mut label = TagLabel::default();
/// label.set_text("ship it #friday");
/// label.tap_at_offset(10, &mut handlers);
/// assert_eq!(*seen.borrow(), vec!["#friday".to_string()]);
/// ```
#[derive(Default)]
pub struct TapHandlers {
    error: Option<KeywordFn>,
    label_tapped: Option<Box<dyn FnMut(&TagLabel)>>,
    pattern_selected: Option<Box<dyn FnMut(&str, PatternKind)>>,
    hashtag: Option<KeywordFn>,
    mention: Option<KeywordFn>,
    url: Option<KeywordFn>,
    custom: Option<Box<dyn FnMut(&str, &str)>>,
}

impl TapHandlers {
    /// Create a set of handlers with every callback unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with a diagnostic message when a tapped run has no keyword.
    #[must_use]
    pub fn on_error(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.error = Some(Box::new(handler));
        self
    }

    /// Called for every tap, whether or not it hits a highlighted run.
    #[must_use]
    pub fn on_label_tapped(mut self, handler: impl FnMut(&TagLabel) + 'static) -> Self {
        self.label_tapped = Some(Box::new(handler));
        self
    }

    /// Called with the keyword and pattern kind before any category-specific
    /// callback.
    #[must_use]
    pub fn on_pattern_selected(mut self, handler: impl FnMut(&str, PatternKind) + 'static) -> Self {
        self.pattern_selected = Some(Box::new(handler));
        self
    }

    /// Called when a hashtag is tapped.
    #[must_use]
    pub fn on_hashtag(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.hashtag = Some(Box::new(handler));
        self
    }

    /// Called when a mention is tapped.
    #[must_use]
    pub fn on_mention(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.mention = Some(Box::new(handler));
        self
    }

    /// Called when a URL is tapped, replacing the default URL action.
    #[must_use]
    pub fn on_url(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.url = Some(Box::new(handler));
        self
    }

    /// Called with the keyword and pattern source when a custom run is
    /// tapped.
    #[must_use]
    pub fn on_custom(mut self, handler: impl FnMut(&str, &str) + 'static) -> Self {
        self.custom = Some(Box::new(handler));
        self
    }

    /// Returns `true` when an `on_url` callback replaces the default action.
    #[must_use]
    pub fn has_url_handler(&self) -> bool {
        self.url.is_some()
    }

    pub(crate) fn emit_error(&mut self, message: &str) {
        if let Some(handler) = self.error.as_mut() {
            handler(message);
        }
    }

    pub(crate) fn emit_label_tapped(&mut self, label: &TagLabel) {
        if let Some(handler) = self.label_tapped.as_mut() {
            handler(label);
        }
    }

    pub(crate) fn emit_pattern_selected(&mut self, keyword: &str, kind: PatternKind) {
        if let Some(handler) = self.pattern_selected.as_mut() {
            handler(keyword, kind);
        }
    }

    pub(crate) fn emit_hashtag(&mut self, keyword: &str) {
        if let Some(handler) = self.hashtag.as_mut() {
            handler(keyword);
        }
    }

    pub(crate) fn emit_mention(&mut self, keyword: &str) {
        if let Some(handler) = self.mention.as_mut() {
            handler(keyword);
        }
    }

    /// Returns `false` when no URL callback is registered.
    pub(crate) fn emit_url(&mut self, keyword: &str) -> bool {
        let Some(handler) = self.url.as_mut() else {
            return false;
        };
        handler(keyword);
        true
    }

    pub(crate) fn emit_custom(&mut self, keyword: &str, pattern: &str) {
        if let Some(handler) = self.custom.as_mut() {
            handler(keyword, pattern);
        }
    }
}

impl fmt::Debug for TapHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapHandlers")
            .field("error", &self.error.is_some())
            .field("label_tapped", &self.label_tapped.is_some())
            .field("pattern_selected", &self.pattern_selected.is_some())
            .field("hashtag", &self.hashtag.is_some())
            .field("mention", &self.mention.is_some())
            .field("url", &self.url.is_some())
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Opens tapped URLs when no `on_url` callback is registered.
pub trait UrlOpener {
    /// Open `url`. Failures are the opener's to report.
    fn open(&mut self, url: &str);
}

/// Opens URLs in the system browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&mut self, url: &str) {
        if let Err(err) = webbrowser::open(url) {
            log::warn!("failed to open URL '{url}': {err}");
        }
    }
}

/// Prefix scheme-less matches such as `www.example.com` with `https://`.
///
/// # Examples
/// ```
/// use taglabel::normalize_url;
/// assert_eq!(normalize_url("www.example.com"), "https://www.example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
#[must_use]
pub fn normalize_url(keyword: &str) -> Cow<'_, str> {
    if keyword.contains("://") {
        Cow::Borrowed(keyword)
    } else {
        Cow::Owned(format!("https://{keyword}"))
    }
}
