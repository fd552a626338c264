//! Command-line serialization for the compiler.

use super::Flavor;

/// Split user-supplied extra arguments.
///
/// Arguments are separated by spaces; a backslash escapes the following
/// character, so `\ ` is a literal space and `\\` a literal backslash.
/// Empty arguments are dropped.
pub fn parse_extra_args(args: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = args.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                Some(&next) if next != '\n' => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(ch),
            },
            ' ' => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    parts.push(current);

    parts.retain(|part| !part.is_empty());
    parts
}

/// Arguments for compiling `source`:
/// `-f <flavor> --json [--test=pcre2] <source> [extra args...]`.
pub fn compile_args(flavor: Flavor, run_tests: bool, source: &str, extra_args: &str) -> Vec<String> {
    let mut args = vec!["-f".to_string(), flavor.as_str().to_string(), "--json".to_string()];
    if run_tests {
        args.push("--test=pcre2".to_string());
    }
    args.push(source.to_string());
    args.extend(parse_extra_args(extra_args));
    args
}
