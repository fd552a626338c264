//! Lexical analysis for Pomsky
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind and byte ranges
//!     ↓
//! Queries → closest token, character-set context
//! ```
//!
//! The lexer is total: malformed input becomes [`TokenKind::Error`] tokens
//! and the scan always runs to the end of the input.

pub mod keywords;
mod lexer;
mod queries;

pub use keywords::{RESERVED_WORDS, is_reserved};
pub use lexer::{LexError, Lexer, Token, TokenKind, tokenize};
pub use queries::{find_closest_token_index, is_in_character_set};
