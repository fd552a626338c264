//! Compiler tests
//!
//! Tests for:
//! - Running the compiler executable and decoding its JSON
//! - Executable validation
//! - Preview compiles
