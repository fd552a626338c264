//! Definition and usage resolution on parsed sources.

use pomsky_ide::base::{TextRange, TextSize, span};
use pomsky_ide::hir::{find_definition, find_name, find_usages, reduce_let_stmts};

use crate::helpers::nth;
use crate::helpers::rule_parser::parse_ok;

fn at(range: TextRange) -> TextSize {
    range.start()
}

// =============================================================================
// DEFINITIONS
// =============================================================================

#[test]
fn test_variable_resolves_to_let() {
    let text = "let digit = ['0'-'9']; digit+";
    let rule = parse_ok(text);
    assert_eq!(
        find_definition(&rule, at(nth(text, "digit", 1))),
        Some(nth(text, "digit", 0))
    );
}

#[test]
fn test_shadowing_resolves_to_latest_binding() {
    let text = r#"let a = "x"; let a = "y"; a"#;
    let rule = parse_ok(text);
    let second = nth(text, "a", 1);
    assert_eq!(find_definition(&rule, at(nth(text, "a", 2))), Some(second));

    // The first binding is fully shadowed
    assert!(find_usages(&rule, "a", nth(text, "a", 0)).is_empty());
    assert_eq!(find_usages(&rule, "a", second), vec![nth(text, "a", 2)]);
}

#[test]
fn test_shadowing_rhs_sees_outer_binding() {
    let text = "let a = 'x'; let a = a a; a";
    let rule = parse_ok(text);
    let outer = nth(text, "a", 0);
    let inner = nth(text, "a", 1);

    assert_eq!(find_definition(&rule, at(nth(text, "a", 2))), Some(outer));
    assert_eq!(
        find_usages(&rule, "a", outer),
        vec![nth(text, "a", 2), nth(text, "a", 3)]
    );
    assert_eq!(find_usages(&rule, "a", inner), vec![nth(text, "a", 4)]);
}

#[test]
fn test_nested_scope_in_group() {
    let text = "let a = 'x'; (let b = a; b) a";
    let rule = parse_ok(text);
    let a_def = nth(text, "a", 0);

    assert_eq!(find_definition(&rule, at(nth(text, "a", 1))), Some(a_def));
    assert_eq!(
        find_definition(&rule, at(nth(text, "b", 1))),
        Some(nth(text, "b", 0))
    );
    assert_eq!(
        find_usages(&rule, "a", a_def),
        vec![nth(text, "a", 1), nth(text, "a", 2)]
    );
}

#[test]
fn test_nested_binding_not_visible_outside() {
    let text = "(let b = 'x'; b) b";
    let rule = parse_ok(text);
    assert_eq!(find_definition(&rule, at(nth(text, "b", 2))), None);
    assert_eq!(
        find_usages(&rule, "b", nth(text, "b", 0)),
        vec![nth(text, "b", 1)]
    );
}

#[test]
fn test_nested_shadowing() {
    let text = "let a = 'x'; (let a = 'y'; a) a";
    let rule = parse_ok(text);
    let outer = nth(text, "a", 0);
    let inner = nth(text, "a", 1);

    assert_eq!(find_definition(&rule, at(nth(text, "a", 2))), Some(inner));
    assert_eq!(find_definition(&rule, at(nth(text, "a", 3))), Some(outer));
    assert_eq!(find_usages(&rule, "a", outer), vec![nth(text, "a", 3)]);
    assert_eq!(find_usages(&rule, "a", inner), vec![nth(text, "a", 2)]);
}

#[test]
fn test_usage_inside_alternation_and_repetition() {
    let text = "let w = 'w'; (w | 'x')+ !>> w";
    let rule = parse_ok(text);
    assert_eq!(
        find_usages(&rule, "w", nth(text, "w", 0)),
        // Occurrence 1 is the literal 'w'
        vec![nth(text, "w", 2), nth(text, "w", 3)]
    );
}

#[test]
fn test_undefined_variable() {
    let text = "'a' missing";
    let rule = parse_ok(text);
    assert_eq!(
        find_name(&rule, at(nth(text, "missing", 0))).map(|n| n.as_str()),
        Some("missing")
    );
    assert_eq!(find_definition(&rule, at(nth(text, "missing", 0))), None);
}

#[test]
fn test_offset_on_literal_has_no_name() {
    let text = "let a = 'x'; a";
    let rule = parse_ok(text);
    assert_eq!(find_name(&rule, TextSize::new(9)), None);
    assert_eq!(find_definition(&rule, TextSize::new(9)), None);
}

#[test]
fn test_enable_statements_are_skipped() {
    let text = "enable lazy; let a = 'x'; a";
    let rule = parse_ok(text);
    let (stmts, inner) = reduce_let_stmts(&rule);
    assert_eq!(stmts.len(), 1);
    assert_eq!(inner.span(), span(26, 27));
    assert_eq!(find_definition(&rule, TextSize::new(26)), Some(span(17, 18)));
}

#[test]
fn test_named_reference_name() {
    let text = ":name('x') ::name";
    let rule = parse_ok(text);
    assert_eq!(
        find_name(&rule, at(nth(text, "name", 1))).map(|n| n.as_str()),
        Some("name")
    );
}
