//! Core of a text label that highlights hashtags, mentions, URLs and custom
//! regular-expression patterns, and turns taps on them into callbacks.
//!
//! Layout, painting and gesture recognition belong to the host toolkit. The
//! crate meets them at three seams: [`TextLayout`] maps a tap point to a
//! character offset, [`StyledText`] carries the tagged and colored runs a
//! renderer draws, and [`UrlOpener`] performs the default action for URL
//! taps. All offsets are UTF-16 code units.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use taglabel::{PatternKind, TagLabel, TapHandlers};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let mut handlers = TapHandlers::new()
//!     .on_pattern_selected(move |keyword, kind| sink.borrow_mut().push((keyword.to_owned(), kind)));
//!
//! let mut label = TagLabel::default();
//! label.set_text("Hello @world, check #fun!");
//! label.tap_at_offset(21, &mut handlers);
//! assert_eq!(*seen.borrow(), vec![("#fun".to_string(), PatternKind::Hash)]);
//! ```

mod color;
mod config;
mod errors;
mod handlers;
mod label;
mod layout;
mod span_index;
mod styled;
mod tap;

pub use color::{ColorPalette, Rgba};
pub use config::{LabelConfig, MAX_SCAN_LEN_ENV};
pub use errors::ConfigError;
pub use handlers::{SystemUrlOpener, TapHandlers, UrlOpener, normalize_url};
pub use label::TagLabel;
pub use layout::{Point, TextLayout};
pub use span_index::{SpanIndex, SpanRange};
pub use styled::{AttributeLookup, AttributeRun, AttributeSink, StyledText, TEXT_COLOR_ATTRIBUTE};
pub use tap::{MISSING_KEYWORD, TapEvent, dispatch, resolve_tap};
pub use taglabel_patterns::{
    CUSTOM_ATTRIBUTE, CategoryMatch, CategoryMatches, CompiledPattern, HASH_ATTRIBUTE,
    MENTION_ATTRIBUTE, PatternCategory, PatternError, PatternKind, PatternKindParseError,
    PatternRegistry, URL_ATTRIBUTE, find_matches,
};
