//! Hover tests for the IDE layer.

use pomsky_ide::ide::HoverResult;

use crate::helpers::{analysis, cursor, nth};

fn hover(marked: &str) -> Option<HoverResult> {
    let (text, offset) = cursor(marked);
    analysis(&text).hover(offset)
}

#[test]
fn test_hover_lookahead() {
    let result = hover("'a' |>> 'b'").unwrap();
    assert!(result.contents.contains("lookahead"));
    assert_eq!(result.range, nth("'a' >> 'b'", ">>", 0));
}

#[test]
fn test_hover_character_set_bracket() {
    let result = hover("|['a'-'z']").unwrap();
    assert!(result.contents.contains("character set"));
}

#[test]
fn test_hover_repetition() {
    assert!(hover("'a'|+").unwrap().contents.contains("once or more"));
    assert!(hover("'a'|{2}").unwrap().contents.contains("repetition"));
}

#[test]
fn test_hover_keyword() {
    let result = hover("|range '0'-'255'").unwrap();
    assert!(result.contents.contains("number range"));
}

#[test]
fn test_hover_code_point() {
    let result = hover("|U+41").unwrap();
    assert_eq!(
        result.contents.as_ref(),
        "## A\nCode point `U+0041`\n\n- dec: 65\n- oct: 101\n- UTF-16: `0041`"
    );
}

#[test]
fn test_hover_in_whitespace_is_none() {
    assert!(hover("'a' |  'b'").is_none());
}

#[test]
fn test_hover_works_without_parse() {
    // Unbalanced parentheses do not parse
    let result = hover("(('a' |% 'b'").unwrap();
    assert!(result.contents.contains("word boundary"));
}
