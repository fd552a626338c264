//! Lexer and token query tests

pub mod tests_lexer;
