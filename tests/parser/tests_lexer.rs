//! Lexer tests: token kinds, error recovery and totality.

use pomsky_ide::base::span;
use pomsky_ide::parser::{LexError, TokenKind, tokenize};
use proptest::prelude::*;
use rstest::rstest;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|token| token.kind).collect()
}

// =============================================================================
// TOKEN KINDS
// =============================================================================

#[rstest]
#[case("^", TokenKind::Caret)]
#[case("$", TokenKind::Dollar)]
#[case(">>", TokenKind::LookAhead)]
#[case("<<", TokenKind::LookBehind)]
#[case("::", TokenKind::Backref)]
#[case("%", TokenKind::BWord)]
#[case("|", TokenKind::Pipe)]
#[case("!", TokenKind::Not)]
#[case("'single'", TokenKind::String)]
#[case(r#""dou\"ble""#, TokenKind::String)]
#[case("U+1F60A", TokenKind::CodePoint)]
#[case("42", TokenKind::Number)]
#[case("Straße", TokenKind::Identifier)]
#[case("_private", TokenKind::Identifier)]
fn test_single_token(#[case] input: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 1, "tokens of {input:?}: {tokens:?}");
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].range, span(0, input.len() as u32));
}

#[test]
fn test_let_statement() {
    assert_eq!(
        kinds("let word = ['a'-'z']+;"),
        [
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::OpenBracket,
            TokenKind::String,
            TokenKind::Dash,
            TokenKind::String,
            TokenKind::CloseBracket,
            TokenKind::Plus,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_trivia_is_skipped() {
    let tokens = tokenize("  'a' # comment with 'quotes'\n  'b'");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].range, span(32, 35));
}

#[test]
fn test_repetition_braces() {
    assert_eq!(
        kinds("'a'{2,5}"),
        [
            TokenKind::String,
            TokenKind::OpenBrace,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::CloseBrace,
        ]
    );
}

// =============================================================================
// ERROR RECOVERY
// =============================================================================

#[test]
fn test_unclosed_string_runs_to_end() {
    let tokens = tokenize("'a' 'unclosed");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Error(LexError::UnclosedString));
    assert_eq!(tokens[1].range, span(4, 13));
}

#[test]
fn test_missing_code_point_number() {
    let tokens = tokenize("U+ 'a'");
    assert_eq!(
        tokens[0].kind,
        TokenKind::Error(LexError::MissingCodePointNumber)
    );
    assert_eq!(tokens[0].range, span(0, 1));
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].range, span(1, 2));
    assert_eq!(tokens[2].kind, TokenKind::String);
}

#[test]
fn test_unknown_characters_continue() {
    let tokens = tokenize("'a' @ 'b'");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[1].kind.is_error());
    assert_eq!(tokens[2].kind, TokenKind::String);
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Whether `gap` consists of whitespace and `#` comments only.
fn is_trivia(gap: &str) -> bool {
    let mut in_comment = false;
    for ch in gap.chars() {
        if in_comment {
            in_comment = ch != '\n';
        } else if ch == '#' {
            in_comment = true;
        } else if !ch.is_whitespace() {
            return false;
        }
    }
    true
}

fn assert_covers(input: &str) {
    let tokens = tokenize(input);
    let mut cursor = 0usize;
    for token in &tokens {
        let start = usize::from(token.start());
        let end = usize::from(token.end());
        assert!(start >= cursor, "overlapping tokens in {input:?}");
        assert!(end > start, "empty token in {input:?}");
        assert!(is_trivia(&input[cursor..start]), "lost text in {input:?}");
        cursor = end;
    }
    assert!(cursor <= input.len());
    assert!(is_trivia(&input[cursor..]), "lost tail in {input:?}");
}

proptest! {
    #[test]
    fn prop_tokens_reconstruct_input(input in "[a-zU0-9_'\"#\\\\ \n\t\\[\\](){}<>:!+*?|.,;=$^%-äß😀]{0,40}") {
        assert_covers(&input);
    }

    #[test]
    fn prop_tokens_reconstruct_any_text(input in "\\PC{0,60}") {
        assert_covers(&input);
    }

    #[test]
    fn prop_tokenize_is_deterministic(input in "\\PC{0,60}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }
}
