//! Foundation types for the Pomsky editor tooling.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source spans (UTF-8 byte offsets)
//! - [`Utf16Range`] - Spans in UTF-16 code units, the unit editors speak
//! - Offset conversion between the two encodings
//!
//! This module has NO dependencies on other crate modules.

mod offsets;

pub use offsets::{
    Utf16Range, byte_range_to_utf16, byte_to_utf16, clamp_to_char_boundary, utf16_len,
    utf16_to_byte,
};
pub use text_size::{TextRange, TextSize};

// Re-export text-size for convenience
pub use text_size;

/// Build a [`TextRange`] from raw byte offsets.
#[inline]
pub fn span(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::new(start), TextSize::new(end))
}

/// Inclusive containment: both the start and the end offset count as inside.
///
/// A cursor sitting directly after an identifier still refers to it, so every
/// offset-based query in the crate uses this instead of [`TextRange::contains`].
#[inline]
pub fn includes(range: TextRange, offset: TextSize) -> bool {
    range.start() <= offset && offset <= range.end()
}

/// Slice `text` by `range`, returning `None` when the range is out of bounds
/// or does not fall on char boundaries.
pub fn slice(text: &str, range: TextRange) -> Option<&str> {
    text.get(usize::from(range.start())..usize::from(range.end()))
}
