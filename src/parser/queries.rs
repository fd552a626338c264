//! Offset queries over a token stream
//!
//! Both queries are token-only: they never need a parsed rule tree, so
//! completion and hover can answer from the lexer output alone.

use crate::base::TextSize;

use super::lexer::{Token, TokenKind};

/// Index of the token under `offset`.
///
/// Returns the token whose range contains `offset` (ends inclusive, so at the
/// boundary between two adjacent tokens the earlier one wins). When `offset`
/// falls in whitespace, returns the index of the next token; past the last
/// token, returns `tokens.len()`.
pub fn find_closest_token_index(tokens: &[Token], offset: TextSize) -> usize {
    // The first token ending at or after `offset` either contains it or is
    // the insertion point.
    tokens.partition_point(|token| token.end() < offset)
}

/// Whether the cursor at `offset` sits inside a `[...]` character set.
///
/// Walks backward from `tokens[index]` (skipping it when the cursor is at or
/// before its start) and looks for an opening bracket. Only kinds that can
/// appear inside a set are stepped over; anything else ends the walk.
/// Error tokens are stepped over as well, so half-typed input does not hide
/// the enclosing set.
pub fn is_in_character_set(tokens: &[Token], index: usize, offset: TextSize) -> bool {
    if tokens.is_empty() {
        return false;
    }

    let mut end = index.min(tokens.len() - 1) + 1;
    if tokens[end - 1].start() >= offset {
        end -= 1;
    }

    for token in tokens[..end].iter().rev() {
        match token.kind {
            TokenKind::OpenBracket => return true,
            kind if !allowed_in_class(kind) => return false,
            _ => {}
        }
    }

    false
}

fn allowed_in_class(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Not
            | TokenKind::Dash
            | TokenKind::Dot
            | TokenKind::String
            | TokenKind::CodePoint
            | TokenKind::Identifier
            | TokenKind::Error(_)
    )
}
