//! Rule tree types
//!
//! The tree is produced by an external parser and consumed read-only. It can
//! be built directly (the constructors below) or deserialized from the
//! parser's JSON form, where every node carries a `"$r"` tag and spans are
//! `[start, end]` byte offsets.

use serde::Deserialize;
use smol_str::SmolStr;

use crate::base::TextRange;

// ============================================================================
// RULES
// ============================================================================

/// A node of the rule tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "$r")]
pub enum Rule {
    Literal {
        content: String,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    CharClass {
        #[serde(default)]
        negative: bool,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Group {
        kind: GroupKind,
        rules: Vec<Rule>,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Alternation {
        rules: Vec<Rule>,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Intersection {
        rules: Vec<Rule>,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Lookaround {
        kind: LookaroundKind,
        rule: Box<Rule>,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Negation {
        rule: Box<Rule>,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Repetition {
        rule: Box<Rule>,
        lower: u32,
        #[serde(default)]
        upper: Option<u32>,
        #[serde(default = "default_greedy")]
        greedy: bool,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    /// A statement followed by the rule it applies to.
    StmtExpr {
        stmt: Box<Stmt>,
        rule: Box<Rule>,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    /// Use of a `let` binding.
    Variable {
        name: SmolStr,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    /// Backreference to a capturing group.
    Reference {
        target: ReferenceTarget,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Boundary {
        kind: BoundaryKind,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Range {
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Regex {
        content: String,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Recursion {
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Grapheme {
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Codepoint {
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Dot {
        #[serde(with = "serde_span")]
        span: TextRange,
    },
}

fn default_greedy() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// `:(...)` or `:name(...)`
    Capturing(Capture),
    /// `atomic(...)`
    Atomic,
    /// `(...)`
    Normal,
    /// A sequence without parentheses, e.g. the top level of a file.
    Implicit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Capture {
    #[serde(default)]
    pub name: Option<SmolStr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookaroundKind {
    Ahead,
    Behind,
    AheadNegative,
    BehindNegative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    Start,
    End,
    Word,
    NotWord,
    WordStart,
    WordEnd,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceTarget {
    Named(SmolStr),
    Number(u32),
    Relative(i32),
}

// ============================================================================
// STATEMENTS
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "$s")]
pub enum Stmt {
    Let(LetStmt),
    Enable {
        setting: SmolStr,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Disable {
        setting: SmolStr,
        #[serde(with = "serde_span")]
        span: TextRange,
    },
    Test {
        #[serde(with = "serde_span")]
        span: TextRange,
    },
}

/// A `let name = rule;` binding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetStmt {
    pub name: SmolStr,
    #[serde(with = "serde_span")]
    pub name_span: TextRange,
    pub rule: Rule,
}

impl Stmt {
    pub fn as_let(&self) -> Option<&LetStmt> {
        match self {
            Stmt::Let(stmt) => Some(stmt),
            _ => None,
        }
    }
}

// ============================================================================
// ACCESSORS & CONSTRUCTORS
// ============================================================================

impl Rule {
    /// Parse a rule tree from the external parser's JSON output.
    pub fn from_json(json: &str) -> Result<Rule, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn span(&self) -> TextRange {
        match self {
            Rule::Literal { span, .. }
            | Rule::CharClass { span, .. }
            | Rule::Group { span, .. }
            | Rule::Alternation { span, .. }
            | Rule::Intersection { span, .. }
            | Rule::Lookaround { span, .. }
            | Rule::Negation { span, .. }
            | Rule::Repetition { span, .. }
            | Rule::StmtExpr { span, .. }
            | Rule::Variable { span, .. }
            | Rule::Reference { span, .. }
            | Rule::Boundary { span, .. }
            | Rule::Range { span }
            | Rule::Regex { span, .. }
            | Rule::Recursion { span }
            | Rule::Grapheme { span }
            | Rule::Codepoint { span }
            | Rule::Dot { span } => *span,
        }
    }

    /// Direct children in source order.
    ///
    /// For a `let` statement the right-hand side comes before the continuation.
    pub fn children(&self) -> Vec<&Rule> {
        match self {
            Rule::Group { rules, .. }
            | Rule::Alternation { rules, .. }
            | Rule::Intersection { rules, .. } => rules.iter().collect(),
            Rule::Lookaround { rule, .. }
            | Rule::Negation { rule, .. }
            | Rule::Repetition { rule, .. } => vec![rule.as_ref()],
            Rule::StmtExpr { stmt, rule, .. } => match stmt.as_let() {
                Some(let_stmt) => vec![&let_stmt.rule, rule.as_ref()],
                None => vec![rule.as_ref()],
            },
            _ => Vec::new(),
        }
    }

    pub fn literal(content: impl Into<String>, span: TextRange) -> Self {
        Rule::Literal {
            content: content.into(),
            span,
        }
    }

    pub fn variable(name: impl Into<SmolStr>, span: TextRange) -> Self {
        Rule::Variable {
            name: name.into(),
            span,
        }
    }

    pub fn group(kind: GroupKind, rules: Vec<Rule>, span: TextRange) -> Self {
        Rule::Group { kind, rules, span }
    }

    pub fn alternation(rules: Vec<Rule>, span: TextRange) -> Self {
        Rule::Alternation { rules, span }
    }

    pub fn negation(rule: Rule, span: TextRange) -> Self {
        Rule::Negation {
            rule: Box::new(rule),
            span,
        }
    }

    pub fn repetition(rule: Rule, lower: u32, upper: Option<u32>, span: TextRange) -> Self {
        Rule::Repetition {
            rule: Box::new(rule),
            lower,
            upper,
            greedy: true,
            span,
        }
    }

    pub fn lookaround(kind: LookaroundKind, rule: Rule, span: TextRange) -> Self {
        Rule::Lookaround {
            kind,
            rule: Box::new(rule),
            span,
        }
    }

    pub fn reference(target: ReferenceTarget, span: TextRange) -> Self {
        Rule::Reference { target, span }
    }

    /// `let name = rhs; rest` spanning `span`.
    pub fn let_in(
        name: impl Into<SmolStr>,
        name_span: TextRange,
        rhs: Rule,
        rest: Rule,
        span: TextRange,
    ) -> Self {
        Rule::StmtExpr {
            stmt: Box::new(Stmt::Let(LetStmt {
                name: name.into(),
                name_span,
                rule: rhs,
            })),
            rule: Box::new(rest),
            span,
        }
    }

    pub fn stmt_expr(stmt: Stmt, rest: Rule, span: TextRange) -> Self {
        Rule::StmtExpr {
            stmt: Box::new(stmt),
            rule: Box::new(rest),
            span,
        }
    }
}

impl GroupKind {
    pub fn capturing(name: Option<&str>) -> Self {
        GroupKind::Capturing(Capture {
            name: name.map(SmolStr::new),
        })
    }
}

mod serde_span {
    use serde::{Deserialize, Deserializer};

    use crate::base::{TextRange, TextSize};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TextRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [start, end] = <[u32; 2]>::deserialize(deserializer)?;
        if end < start {
            return Err(serde::de::Error::custom(format!(
                "span end {end} is before start {start}"
            )));
        }
        Ok(TextRange::new(TextSize::new(start), TextSize::new(end)))
    }
}
