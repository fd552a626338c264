//! Shared test helpers.

pub mod rule_parser;

use pomsky_ide::base::{TextRange, TextSize, span};
use pomsky_ide::ide::{Analysis, AnalysisHost};

pub const TEST_URI: &str = "file:///test.pomsky";

/// An analysis host backed by the test parser.
pub fn host() -> AnalysisHost {
    AnalysisHost::new(rule_parser::parse)
}

/// Snapshot of `text` as a single document.
pub fn analysis(text: &str) -> Analysis {
    host().analysis_for(TEST_URI, text)
}

/// Byte range of the `n`th occurrence (0-based) of `needle` in `text`.
pub fn nth(text: &str, needle: &str, n: usize) -> TextRange {
    let start = text
        .match_indices(needle)
        .nth(n)
        .map(|(start, _)| start)
        .unwrap_or_else(|| panic!("{needle:?} #{n} not in {text:?}"));
    span(start as u32, (start + needle.len()) as u32)
}

/// Offset of the `|` cursor marker, and the text without it.
pub fn cursor(marked: &str) -> (String, TextSize) {
    let offset = marked.find('|').expect("text has a `|` cursor marker");
    let text = format!("{}{}", &marked[..offset], &marked[offset + 1..]);
    (text, TextSize::new(offset as u32))
}
