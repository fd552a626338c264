//! The rule tree consumed by scope resolution
//!
//! Parsing the full grammar is left to an external component. This module
//! defines the tree shape it must hand back and the [`RuleParser`] seam it
//! plugs into.

mod rule;

pub use rule::{
    BoundaryKind, Capture, GroupKind, LetStmt, LookaroundKind, ReferenceTarget, Rule, Stmt,
};

use std::fmt;

use crate::base::TextRange;

/// A parse error reported by the external parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: TextRange,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: TextRange) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message,
            u32::from(self.span.start()),
            u32::from(self.span.end())
        )
    }
}

impl std::error::Error for ParseError {}

/// Outcome of parsing one document.
pub type RuleOrErrors = Result<Rule, Vec<ParseError>>;

/// The external parser.
///
/// Any `Fn(&str) -> RuleOrErrors` closure works as a parser.
pub trait RuleParser: Send + Sync {
    fn parse(&self, source: &str) -> RuleOrErrors;
}

impl<F> RuleParser for F
where
    F: Fn(&str) -> RuleOrErrors + Send + Sync,
{
    fn parse(&self, source: &str) -> RuleOrErrors {
        self(source)
    }
}
