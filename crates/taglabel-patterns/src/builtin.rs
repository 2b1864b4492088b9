//! Built-in hashtag, mention and URL expressions.

use crate::category::PatternKind;
use crate::compiled::CompiledPattern;
use std::sync::LazyLock;

/// A `#` at the start, after whitespace or at the end, followed by letters,
/// digits or underscores.
pub const HASH_SOURCE: &str = r"(?:^|\s|$)#[\p{L}0-9_]*";

/// Like [`HASH_SOURCE`] for `@`, additionally allowed after a period.
pub const MENTION_SOURCE: &str = r"(?:^|\s|$|[.])@[\p{L}0-9_]*";

/// Scheme or host prefix, URL-safe body ending on a word character, `/` or
/// `#`, then a boundary lookahead.
pub const URL_SOURCE: &str = concat!(
    r"(^|\s)?",
    r"((?:https?://|www\.|pic\.)[-\w;/?:@&=+$|.!~*'()\[\]%#,☺]+[\w/#](?:\(\))?)",
    r"(?=$|[\s',|().:;?\-\[\]>])",
);

static HASH: LazyLock<Option<CompiledPattern>> =
    LazyLock::new(|| compile_builtin(PatternKind::Hash, HASH_SOURCE));
static MENTION: LazyLock<Option<CompiledPattern>> =
    LazyLock::new(|| compile_builtin(PatternKind::Mention, MENTION_SOURCE));
static URL: LazyLock<Option<CompiledPattern>> =
    LazyLock::new(|| compile_builtin(PatternKind::Url, URL_SOURCE));

fn compile_builtin(kind: PatternKind, source: &str) -> Option<CompiledPattern> {
    CompiledPattern::compile(source)
        .inspect_err(|err| log::error!("built-in {kind} pattern failed to compile: {err}"))
        .ok()
}

/// Shared compiled expression for a built-in kind; `None` for custom.
pub(crate) fn compiled(kind: PatternKind) -> Option<&'static CompiledPattern> {
    match kind {
        PatternKind::Hash => HASH.as_ref(),
        PatternKind::Mention => MENTION.as_ref(),
        PatternKind::Url => URL.as_ref(),
        PatternKind::Custom => None,
    }
}
