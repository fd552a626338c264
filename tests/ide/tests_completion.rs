//! Completion tests for the IDE layer.

use pomsky_ide::base::TextRange;
use pomsky_ide::ide::{CompletionKind, CompletionResult, Detail, resolve_completion};

use crate::helpers::{analysis, cursor, nth};

fn complete(marked: &str) -> CompletionResult {
    let (text, offset) = cursor(marked);
    analysis(&text).completions(offset)
}

fn labels(result: &CompletionResult) -> Vec<&str> {
    result.items.iter().map(|item| item.label.as_ref()).collect()
}

// =============================================================================
// EXPRESSION CONTEXT
// =============================================================================

#[test]
fn test_declared_variables_are_offered_first() {
    let result = complete("let digit = ['0'-'9']; let sep = '-'; |");
    let labels = labels(&result);
    assert_eq!(&labels[..2], &["digit", "sep"]);
    assert_eq!(result.items[0].kind, CompletionKind::Variable);
    assert_eq!(result.items[0].detail.as_deref(), Some("variable"));
    assert!(labels.contains(&"Start"));
    assert!(labels.contains(&"lazy"));
}

#[test]
fn test_variables_offered_while_document_does_not_parse() {
    let result = complete("let foo = ; |");
    assert_eq!(labels(&result)[0], "foo");
}

#[test]
fn test_replace_range_covers_identifier() {
    let (text, offset) = cursor("let x = 'a'; Sta|");
    let result = analysis(&text).completions(offset);
    assert_eq!(result.replace_range, nth(&text, "Sta", 0));
}

#[test]
fn test_replace_range_empty_in_whitespace() {
    let (text, offset) = cursor("'a' | 'b'");
    let result = analysis(&text).completions(offset);
    assert_eq!(result.replace_range, TextRange::empty(offset));
    assert!(!result.is_empty());
}

#[test]
fn test_no_completion_inside_string() {
    assert!(complete("'hel|lo'").is_empty());
    assert!(complete("\"uncl|osed").is_empty());
}

// =============================================================================
// CHARACTER SET CONTEXT
// =============================================================================

#[test]
fn test_character_set_items() {
    let result = complete("let myvar = 'x'; ['a' |");
    let labels = labels(&result);
    assert!(labels.contains(&"word"));
    assert!(labels.contains(&"Uppercase_Letter"));
    assert!(!labels.contains(&"myvar"));
    // `v` is the vertical whitespace class, not the variable
    assert!(labels.contains(&"v"));
    assert!(!labels.contains(&"Start"));
}

#[test]
fn test_after_closed_set_is_expression_context() {
    let result = complete("['a'] |");
    assert!(labels(&result).contains(&"Start"));
}

// =============================================================================
// RESOLVE
// =============================================================================

#[test]
fn test_resolve_character_class() {
    let result = complete("[|");
    let word = result
        .items
        .iter()
        .find(|item| item.label.as_ref() == "word")
        .cloned()
        .unwrap();
    assert!(word.documentation.is_none());

    let resolved = resolve_completion(word);
    assert!(resolved.documentation.unwrap().contains("_word_ character class"));
}

#[test]
fn test_resolve_snippet_keeps_insert_text() {
    let result = complete("|");
    let let_item = result
        .items
        .iter()
        .find(|item| item.label.as_ref() == "let")
        .cloned()
        .unwrap();
    assert!(let_item.is_snippet);
    assert_eq!(let_item.detail.as_deref(), Some(Detail::Snippet.as_str()));

    let resolved = resolve_completion(let_item);
    assert!(resolved.insert_text.unwrap().starts_with("let ${1:var_name}"));
    assert!(resolved.documentation.unwrap().contains("Declares a variable"));
}

#[test]
fn test_resolve_unicode_names() {
    let result = complete("[Gr|");
    let find = |label: &str| {
        result
            .items
            .iter()
            .find(|item| item.label.as_ref() == label)
            .cloned()
            .unwrap()
    };

    let script = resolve_completion(find("Grek"));
    assert_eq!(script.detail.as_deref(), Some("script"));
    assert_eq!(script.documentation.as_deref(), Some("Alias for the 'Greek' script"));

    let block = resolve_completion(find("InGreek_And_Coptic"));
    assert_eq!(
        block.documentation.as_deref(),
        Some("The 'InGreek_And_Coptic' Unicode block")
    );

    let property = resolve_completion(find("White_Space"));
    assert_eq!(property.kind, CompletionKind::Constant);
    assert_eq!(
        property.documentation.as_deref(),
        Some("The 'White_Space' Unicode property")
    );
}
