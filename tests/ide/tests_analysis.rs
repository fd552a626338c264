//! Analysis host and document cache tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pomsky_ide::base::{TextSize, Utf16Range, span};
use pomsky_ide::ide::AnalysisHost;

use crate::helpers::{TEST_URI, host, rule_parser};

fn counting_host() -> (AnalysisHost, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let host = AnalysisHost::new(move |source: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        rule_parser::parse(source)
    });
    (host, count)
}

#[test]
fn test_parse_runs_once_per_content() {
    let (host, count) = counting_host();
    let first = host.analysis_for(TEST_URI, "let a = 'x'; a");
    assert!(first.rule().is_some());
    assert!(first.rule().is_some());

    let second = host.analysis(TEST_URI).unwrap();
    assert!(second.rule().is_some());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_token_features_do_not_parse() {
    let (host, count) = counting_host();
    let analysis = host.analysis_for(TEST_URI, "'a' >> 'b'");
    let _ = analysis.hover(TextSize::new(4));
    let _ = analysis.completions(TextSize::new(0));
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(!host.cache().get(TEST_URI).unwrap().is_parsed());
}

#[test]
fn test_changed_content_replaces_entry() {
    let (host, count) = counting_host();
    let old = host.analysis_for(TEST_URI, "'a'");
    assert!(old.rule().is_some());

    host.set_file_content(TEST_URI, "'b'");
    let new = host.analysis(TEST_URI).unwrap();
    assert_eq!(new.text(), "'b'");
    assert!(new.rule().is_some());
    assert_eq!(count.load(Ordering::SeqCst), 2);

    // Old snapshots are unaffected
    assert_eq!(old.text(), "'a'");
}

#[test]
fn test_unchanged_content_keeps_entry() {
    let host = host();
    let first = host.set_file_content(TEST_URI, "'a'");
    let second = host.set_file_content(TEST_URI, "'a'");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(host.cache().len(), 1);
}

#[test]
fn test_documents_are_independent() {
    let host = host();
    host.set_file_content("file:///a.pomsky", "'a'");
    host.set_file_content("file:///b.pomsky", "'b'");

    let mut files = host.files();
    files.sort();
    assert_eq!(files, vec!["file:///a.pomsky", "file:///b.pomsky"]);

    host.remove_file("file:///a.pomsky");
    assert!(!host.has_file("file:///a.pomsky"));
    assert_eq!(host.analysis("file:///b.pomsky").unwrap().text(), "'b'");
    assert!(host.analysis("file:///a.pomsky").is_none());
}

#[test]
fn test_parse_errors_leave_tokens_available() {
    let host = host();
    let analysis = host.analysis_for(TEST_URI, "(('a'");
    assert!(analysis.rule().is_none());
    assert_eq!(analysis.tokens().len(), 3);
    assert!(analysis.inlay_hints().is_empty());
}

#[test]
fn test_utf16_range_conversion() {
    let host = host();
    let analysis = host.analysis_for(TEST_URI, "'ä😀' x");
    // `x` is at byte 9 and UTF-16 unit 6
    assert_eq!(analysis.utf16_range(span(9, 10)), Utf16Range::new(6, 7));
    assert_eq!(analysis.utf16_range(span(0, 0)), Utf16Range::new(0, 0));
}
