//! Lexical scope resolution over the rule tree.
//!
//! A `let` binding is visible in the right-hand sides of the statements after
//! it in the same chain and in the chain's continuation rule. A later `let`
//! of the same name shadows it from that statement's continuation onward; the
//! shadowing statement's own right-hand side still sees the outer binding.
//!
//! Every walk is span-gated: subtrees whose span does not include the query
//! offset are never entered.

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize, includes};
use crate::syntax::{LetStmt, ReferenceTarget, Rule};

// ============================================================================
// LET CHAINS
// ============================================================================

/// Flatten a chain of nested `StmtExpr` nodes.
///
/// Returns the `let` statements in source order and the first rule that is
/// not a `StmtExpr`. Non-`let` statements (`enable`, `disable`, `test`) are
/// skipped. For any other rule the chain is empty and the rule is returned
/// as-is.
pub fn reduce_let_stmts(rule: &Rule) -> (Vec<&LetStmt>, &Rule) {
    let mut stmts = Vec::new();
    let mut inner = rule;
    while let Rule::StmtExpr { stmt, rule, .. } = inner {
        if let Some(let_stmt) = stmt.as_let() {
            stmts.push(let_stmt);
        }
        inner = rule;
    }
    (stmts, inner)
}

/// Latest binding of `name` among `stmts`.
fn latest_binding(stmts: &[&LetStmt], name: &str) -> Option<TextRange> {
    stmts
        .iter()
        .rev()
        .find(|stmt| stmt.name == name)
        .map(|stmt| stmt.name_span)
}

// ============================================================================
// FIND NAME
// ============================================================================

/// The name under `offset`: a `let` name, a variable, or a named reference.
pub fn find_name(rule: &Rule, offset: TextSize) -> Option<&SmolStr> {
    if !includes(rule.span(), offset) {
        return None;
    }

    match rule {
        Rule::Group { rules, .. }
        | Rule::Alternation { rules, .. }
        | Rule::Intersection { rules, .. } => rules.iter().find_map(|part| find_name(part, offset)),

        Rule::Lookaround { rule, .. }
        | Rule::Negation { rule, .. }
        | Rule::Repetition { rule, .. } => find_name(rule, offset),

        Rule::StmtExpr { stmt, rule, .. } => {
            if let Some(let_stmt) = stmt.as_let() {
                if includes(let_stmt.name_span, offset) {
                    return Some(&let_stmt.name);
                }
                if let Some(found) = find_name(&let_stmt.rule, offset) {
                    return Some(found);
                }
            }
            find_name(rule, offset)
        }

        Rule::Variable { name, .. } => Some(name),
        Rule::Reference {
            target: ReferenceTarget::Named(name),
            ..
        } => Some(name),

        _ => None,
    }
}

// ============================================================================
// FIND DEFINITION
// ============================================================================

/// Name span of the binding that the name under `offset` refers to.
///
/// On a `let` name, that name's own span is returned. Returns `None` when no
/// name is under the cursor or no binding of it is in scope.
pub fn find_definition(rule: &Rule, offset: TextSize) -> Option<TextRange> {
    let name = find_name(rule, offset)?;
    find_definition_impl(rule, offset, name)
}

fn find_definition_impl(rule: &Rule, offset: TextSize, name: &str) -> Option<TextRange> {
    if !includes(rule.span(), offset) {
        return None;
    }

    match rule {
        Rule::Group { rules, .. }
        | Rule::Alternation { rules, .. }
        | Rule::Intersection { rules, .. } => rules
            .iter()
            .find_map(|part| find_definition_impl(part, offset, name)),

        Rule::Lookaround { rule, .. }
        | Rule::Negation { rule, .. }
        | Rule::Repetition { rule, .. } => find_definition_impl(rule, offset, name),

        Rule::StmtExpr { .. } => {
            let (stmts, inner) = reduce_let_stmts(rule);

            if let Some(stmt) = stmts
                .iter()
                .find(|stmt| stmt.name == name && includes(stmt.name_span, offset))
            {
                return Some(stmt.name_span);
            }

            // A right-hand side sees the bindings before its own statement.
            for (i, stmt) in stmts.iter().enumerate() {
                if includes(stmt.rule.span(), offset) {
                    return find_definition_impl(&stmt.rule, offset, name)
                        .or_else(|| latest_binding(&stmts[..i], name));
                }
            }

            if includes(inner.span(), offset) {
                return find_definition_impl(inner, offset, name)
                    .or_else(|| latest_binding(&stmts, name));
            }

            None
        }

        _ => None,
    }
}

// ============================================================================
// FIND USAGES
// ============================================================================

/// Spans of every variable referring to the binding at `definition`.
///
/// `definition` is the name span of a `let`, as returned by
/// [`find_definition`]. Usages are returned in source order. The binding's
/// own right-hand side is never searched.
pub fn find_usages(rule: &Rule, name: &str, definition: TextRange) -> Vec<TextRange> {
    let mut acc = Vec::new();
    find_usages_impl(rule, name, definition, false, &mut acc);
    acc
}

fn find_usages_impl(
    rule: &Rule,
    name: &str,
    definition: TextRange,
    in_scope: bool,
    acc: &mut Vec<TextRange>,
) {
    if !in_scope && !includes(rule.span(), definition.start()) {
        return;
    }

    match rule {
        Rule::Group { rules, .. }
        | Rule::Alternation { rules, .. }
        | Rule::Intersection { rules, .. } => {
            for part in rules {
                find_usages_impl(part, name, definition, in_scope, acc);
            }
        }

        Rule::Lookaround { rule, .. }
        | Rule::Negation { rule, .. }
        | Rule::Repetition { rule, .. } => {
            find_usages_impl(rule, name, definition, in_scope, acc);
        }

        Rule::StmtExpr { .. } => {
            let (stmts, inner) = reduce_let_stmts(rule);

            let visible = if in_scope {
                Some(&stmts[..])
            } else {
                stmts
                    .iter()
                    .position(|stmt| stmt.name_span.start() == definition.start())
                    .map(|i| &stmts[i + 1..])
            };

            match visible {
                Some(visible) => {
                    for stmt in visible {
                        find_usages_impl(&stmt.rule, name, definition, true, acc);
                        if stmt.name == name {
                            // Shadowed from here on
                            return;
                        }
                    }
                    find_usages_impl(inner, name, definition, true, acc);
                }
                None => {
                    for stmt in &stmts {
                        find_usages_impl(&stmt.rule, name, definition, false, acc);
                    }
                    find_usages_impl(inner, name, definition, false, acc);
                }
            }
        }

        Rule::Variable { name: var, span } => {
            if in_scope && var.as_str() == name {
                acc.push(*span);
            }
        }

        _ => {}
    }
}
