//! Reserved words of the Pomsky language
//!
//! Reserved words lex as plain identifiers; this table is what keeps them
//! from being used as variable names.

/// Words that can never name a variable.
pub const RESERVED_WORDS: &[&str] = &[
    "U",
    "let",
    "lazy",
    "greedy",
    "range",
    "base",
    "atomic",
    "enable",
    "disable",
    "if",
    "else",
    "recursion",
    "regex",
    "test",
    "call",
];

/// Check if a word is reserved.
#[inline]
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}
