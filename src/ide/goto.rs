//! Go-to-definition implementation.

use crate::base::{TextRange, TextSize};
use crate::hir;
use crate::syntax::Rule;

/// Result of a go-to-definition request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoResult {
    /// The name span of the binding, if one was found.
    pub target: Option<TextRange>,
}

impl GotoResult {
    /// Create an empty result (no target found).
    pub fn empty() -> Self {
        Self { target: None }
    }

    /// Create a result with a single target.
    pub fn single(target: TextRange) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Check if a target was found.
    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }
}

/// Find the `let` binding the name under `offset` refers to.
pub fn goto_definition(rule: &Rule, offset: TextSize) -> GotoResult {
    match hir::find_definition(rule, offset) {
        Some(target) => GotoResult::single(target),
        None => GotoResult::empty(),
    }
}
