//! Inlay hints implementation.
//!
//! Capturing groups are numbered in source order; each gets its number
//! shown right after the `:` (or after the group name, if it has one).

use crate::base::TextSize;
use crate::syntax::{GroupKind, Rule};

/// An inlay hint to display in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlayHint {
    /// Where the hint is rendered.
    pub position: TextSize,
    /// The hint text.
    pub label: String,
    pub tooltip: String,
    pub kind: InlayHintKind,
}

/// Kind of inlay hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InlayHintKind {
    CaptureIndex,
}

/// Get inlay hints for a parsed document.
pub fn inlay_hints(rule: &Rule) -> Vec<InlayHint> {
    let mut hints = Vec::new();
    collect(rule, &mut hints);
    hints
}

fn collect(rule: &Rule, hints: &mut Vec<InlayHint>) {
    if let Rule::Group {
        kind: GroupKind::Capturing(capture),
        span,
        ..
    } = rule
    {
        let name_len = capture.name.as_ref().map_or(0, |name| name.len());
        let number = hints.len() + 1;
        hints.push(InlayHint {
            position: span.start() + TextSize::new(1 + name_len as u32),
            label: number.to_string(),
            tooltip: format!("Capturing group #{number}"),
            kind: InlayHintKind::CaptureIndex,
        });
    }

    for child in rule.children() {
        collect(child, hints);
    }
}
