//! Rename implementation.

use std::sync::Arc;

use crate::base::{TextRange, TextSize, includes, slice};
use crate::hir;
use crate::syntax::Rule;

/// A single text replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: Arc<str>,
}

/// All edits of one rename, applied together or not at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameResult {
    /// The sanitized name actually written.
    pub new_name: Arc<str>,
    /// Definition first, then usages in source order.
    pub edits: Vec<TextEdit>,
}

impl RenameResult {
    /// Apply every edit to `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut edits: Vec<&TextEdit> = self.edits.iter().collect();
        edits.sort_by_key(|edit| std::cmp::Reverse(edit.range.start()));

        let mut result = text.to_string();
        for edit in edits {
            result.replace_range(
                usize::from(edit.range.start())..usize::from(edit.range.end()),
                &edit.new_text,
            );
        }
        result
    }
}

/// The range of the variable name under `offset`, if it can be renamed.
pub fn prepare_rename(text: &str, rule: &Rule, offset: TextSize) -> Option<TextRange> {
    let definition = hir::find_definition(rule, offset)?;
    if includes(definition, offset) {
        return Some(definition);
    }
    let name = slice(text, definition)?;
    hir::find_usages(rule, name, definition)
        .into_iter()
        .find(|usage| includes(*usage, offset))
}

/// Rename the variable under `offset` and all of its uses.
///
/// `new_name` is sanitized first; see [`hir::sanitize_name`].
pub fn rename(text: &str, rule: &Rule, offset: TextSize, new_name: &str) -> Option<RenameResult> {
    let definition = hir::find_definition(rule, offset)?;
    let name = slice(text, definition)?;
    let usages = hir::find_usages(rule, name, definition);

    let new_name: Arc<str> = Arc::from(hir::sanitize_name(new_name));
    let edits = std::iter::once(definition)
        .chain(usages)
        .map(|range| TextEdit {
            range,
            new_text: new_name.clone(),
        })
        .collect();

    Some(RenameResult { new_name, edits })
}
