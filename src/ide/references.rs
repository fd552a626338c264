//! Find references implementation.

use crate::base::{TextRange, TextSize, slice};
use crate::hir;
use crate::syntax::Rule;

/// Result of a find-references request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceResult {
    /// All references found, in source order.
    pub references: Vec<Reference>,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn ranges(&self) -> impl Iterator<Item = TextRange> + '_ {
        self.references.iter().map(|r| r.range)
    }
}

/// A reference to a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    pub range: TextRange,
    /// Whether this is the `let` name (vs a use).
    pub is_definition: bool,
}

/// Find all uses of the variable under `offset`.
///
/// The definition is listed first when `include_declaration` is set.
pub fn find_references(
    text: &str,
    rule: &Rule,
    offset: TextSize,
    include_declaration: bool,
) -> ReferenceResult {
    let Some(definition) = hir::find_definition(rule, offset) else {
        return ReferenceResult::empty();
    };
    let Some(name) = slice(text, definition) else {
        return ReferenceResult::empty();
    };

    let mut references = Vec::new();
    if include_declaration {
        references.push(Reference {
            range: definition,
            is_definition: true,
        });
    }
    references.extend(
        hir::find_usages(rule, name, definition)
            .into_iter()
            .map(|range| Reference {
                range,
                is_definition: false,
            }),
    );

    ReferenceResult { references }
}
