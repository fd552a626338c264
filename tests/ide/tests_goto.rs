//! Go to definition tests for the IDE layer.

use pomsky_ide::base::Utf16Range;

use crate::helpers::{analysis, nth};

#[test]
fn test_goto_from_usage() {
    let text = "let num = ['0'-'9']+; num '.' num";
    let result = analysis(text).goto_definition(nth(text, "num", 2).start());
    assert_eq!(result.target, Some(nth(text, "num", 0)));
}

#[test]
fn test_goto_on_definition_returns_itself() {
    let text = "let num = '1'; num";
    let result = analysis(text).goto_definition(nth(text, "num", 0).start());
    assert_eq!(result.target, Some(nth(text, "num", 0)));
}

#[test]
fn test_goto_cursor_at_end_of_name() {
    let text = "let num = '1'; num";
    let result = analysis(text).goto_definition(nth(text, "num", 1).end());
    assert_eq!(result.target, Some(nth(text, "num", 0)));
}

#[test]
fn test_goto_undefined_is_empty() {
    let text = "'a' undefined";
    assert!(
        analysis(text)
            .goto_definition(nth(text, "undefined", 0).start())
            .is_empty()
    );
}

#[test]
fn test_goto_with_parse_errors_is_empty() {
    let text = "let a = (; a";
    let analysis = analysis(text);
    assert!(analysis.rule().is_none());
    assert!(analysis.goto_definition(nth(text, "a", 1).start()).is_empty());
}

#[test]
fn test_goto_target_in_utf16() {
    let text = "let äx = 'ä'; let üb = äx; üb";
    let analysis = analysis(text);
    let target = analysis
        .goto_definition(nth(text, "üb", 1).start())
        .target
        .unwrap();
    assert_eq!(target, nth(text, "üb", 0));
    // ä and ü are two bytes but one UTF-16 unit
    let before = "let äx = 'ä'; let ";
    let start = before.encode_utf16().count() as u32;
    assert_eq!(analysis.utf16_range(target), Utf16Range::new(start, start + 2));
}
