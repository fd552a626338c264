//! Diagnostics - Compiler diagnostics translated for the editor.
//!
//! The compiler reports UTF-8 byte spans; editors address text in UTF-16
//! code units. Every span is converted against the exact text that was
//! compiled.

use std::sync::Arc;

use crate::base::{TextRange, TextSize, Utf16Range, byte_range_to_utf16, clamp_to_char_boundary};

use super::{CompileResponse, CompilerDiagnostic, CompilerSeverity};

/// Value of [`Diagnostic::source`].
pub const DIAGNOSTIC_SOURCE: &str = "pomsky";

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

impl From<CompilerSeverity> for Severity {
    fn from(severity: CompilerSeverity) -> Self {
        match severity {
            CompilerSeverity::Error => Severity::Error,
            CompilerSeverity::Warning => Severity::Warning,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticTag {
    Deprecated,
}

impl DiagnosticTag {
    /// Convert to LSP diagnostic tag number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            DiagnosticTag::Deprecated => 2,
        }
    }
}

/// A diagnostic ready to publish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Location in UTF-16 code units.
    pub range: Utf16Range,
    /// Location in UTF-8 bytes, clamped to the text.
    pub byte_range: TextRange,
    pub severity: Severity,
    /// `"<kind> (<code>)"`.
    pub code: Arc<str>,
    pub message: Arc<str>,
    pub source: &'static str,
    pub tags: Vec<DiagnosticTag>,
}

/// Translate every diagnostic in `response` against the compiled `text`.
pub fn to_diagnostics(text: &str, response: &CompileResponse) -> Vec<Diagnostic> {
    response
        .diagnostics
        .iter()
        .map(|diagnostic| translate(text, diagnostic))
        .collect()
}

/// Translate one compiler diagnostic.
///
/// Only the first span is used; a diagnostic without spans is placed at the
/// start of the text.
pub fn translate(text: &str, diagnostic: &CompilerDiagnostic) -> Diagnostic {
    let (start, end) = diagnostic
        .spans
        .first()
        .map(|span| (span.start, span.end))
        .unwrap_or_default();
    let start = clamp_to_char_boundary(text, start);
    let end = clamp_to_char_boundary(text, end.max(start));

    let message = match diagnostic.help.first() {
        Some(help) => format!("{}\n\nhelp: {help}", diagnostic.description),
        None => diagnostic.description.clone(),
    };

    let tags = if diagnostic.kind == "deprecated" {
        vec![DiagnosticTag::Deprecated]
    } else {
        Vec::new()
    };

    Diagnostic {
        range: byte_range_to_utf16(text, start, end),
        byte_range: TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32)),
        severity: diagnostic.severity.into(),
        code: format!("{} ({})", diagnostic.kind, diagnostic.code).into(),
        message: message.into(),
        source: DIAGNOSTIC_SOURCE,
        tags,
    }
}
