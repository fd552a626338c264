//! UTF-8 ↔ UTF-16 offset conversion.
//!
//! The crate indexes source text by UTF-8 byte offsets. The external compiler
//! reports byte offsets as well, but editors address text in UTF-16 code units,
//! so anything surfaced to the editor goes through these helpers.

/// A half-open range measured in UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16Range {
    pub start: u32,
    pub end: u32,
}

impl Utf16Range {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Number of UTF-16 code units needed to encode `text`.
#[inline]
pub fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Clamp a byte offset into `text` and round it down to the nearest char boundary.
pub fn clamp_to_char_boundary(text: &str, byte: usize) -> usize {
    let mut byte = byte.min(text.len());
    while !text.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

/// Convert a byte offset into a UTF-16 offset.
pub fn byte_to_utf16(text: &str, byte: usize) -> u32 {
    utf16_len(&text[..clamp_to_char_boundary(text, byte)])
}

/// Convert a UTF-16 offset into a byte offset.
///
/// Offsets landing inside a surrogate pair resolve to the start of that char;
/// offsets past the end resolve to `text.len()`.
pub fn utf16_to_byte(text: &str, utf16: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in text.char_indices() {
        let next = units + ch.len_utf16() as u32;
        if next > utf16 {
            return idx;
        }
        units = next;
    }
    text.len()
}

/// Convert a byte range reported by the compiler into a UTF-16 range.
///
/// The prefix and the covered slice are re-encoded separately, so the end is
/// `start + utf16_len(slice)` rather than a second independent scan.
pub fn byte_range_to_utf16(text: &str, start: usize, end: usize) -> Utf16Range {
    let start = clamp_to_char_boundary(text, start);
    let end = clamp_to_char_boundary(text, end.max(start));
    let start16 = utf16_len(&text[..start]);
    let end16 = start16 + utf16_len(&text[start..end]);
    Utf16Range::new(start16, end16)
}
