//! Rename target validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::is_reserved;

/// Anything that cannot appear in an identifier.
static NON_IDENT_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Alphabetic}\p{M}\p{Nd}\p{Pc}]").expect("identifier filter is a valid regex")
});

/// Turn a user-supplied name into a valid, non-reserved variable name.
///
/// Characters outside letters, marks, decimal digits and connector
/// punctuation are dropped, as are leading digits (the lexer would read them
/// as a number). An empty or reserved result gets a trailing `_`.
pub fn sanitize_name(name: &str) -> String {
    let filtered = NON_IDENT_CHARS.replace_all(name, "");
    let trimmed = filtered.trim_start_matches(|c: char| c.is_ascii_digit());

    let mut sanitized = trimmed.to_string();
    if sanitized.is_empty() || is_reserved(&sanitized) {
        sanitized.push('_');
    }
    sanitized
}
