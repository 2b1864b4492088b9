//! Category patterns and matching for taglabel.
//!
//! The crate holds everything that does not depend on label state: the
//! pattern categories, the built-in hashtag, mention and URL expressions,
//! the per-label registry of compiled custom expressions, and the matcher
//! that turns text into per-category match lists positioned in UTF-16 code
//! units.

mod builtin;
mod category;
mod compiled;
mod errors;
mod matcher;
mod offsets;
mod registry;

pub use builtin::{HASH_SOURCE, MENTION_SOURCE, URL_SOURCE};
pub use category::{
    CUSTOM_ATTRIBUTE, HASH_ATTRIBUTE, MENTION_ATTRIBUTE, PatternCategory, PatternKind,
    PatternKindParseError, URL_ATTRIBUTE,
};
pub use compiled::CompiledPattern;
pub use errors::PatternError;
pub use matcher::{CategoryMatch, CategoryMatches, find_matches};
pub use offsets::{Utf16Cursor, utf16_len};
pub use registry::PatternRegistry;
