//! The compiler's `--json` output.

use serde::{Deserialize, Serialize};

use super::Flavor;

/// One compilation, as printed by the compiler on stdout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompileResponse {
    /// Output format version, currently `"1"`.
    pub version: String,
    pub success: bool,
    /// The compiled regex, present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default)]
    pub diagnostics: Vec<CompilerDiagnostic>,
    #[serde(default)]
    pub timings: Timings,
}

/// Time spent compiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Total time in microseconds.
    pub all: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerSeverity {
    Error,
    Warning,
}

/// A diagnostic as reported by the compiler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompilerDiagnostic {
    pub severity: CompilerSeverity,
    pub kind: String,
    pub code: String,
    /// UTF-8 byte spans into the compiled source.
    #[serde(default)]
    pub spans: Vec<ByteSpan>,
    pub description: String,
    #[serde(default)]
    pub help: Vec<String>,
    /// Pre-rendered terminal output.
    #[serde(default)]
    pub visual: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSpan {
    pub start: usize,
    pub end: usize,
}

/// Result of compiling a document for the preview panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    pub uri: String,
    pub flavor: Flavor,
    /// Trimmed `--version` output of the compiler.
    pub version_info: String,
    #[serde(flatten)]
    pub response: CompileResponse,
}
