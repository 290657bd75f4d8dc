use std::ops::Range;
use thiserror::Error;

/// Why a byte range could not be mapped onto an entry's text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("cannot map byte ranges onto empty text")]
    EmptyText,

    #[error("range starts at byte {start} but the text is only {byte_len} bytes long")]
    StartOutOfBounds { start: usize, byte_len: usize },

    #[error("range length {length} overflows the size delta")]
    SizeOverflow { length: usize },

    #[error("chars {start}..{end} fall outside the entry")]
    OutsideBuffer { start: usize, end: usize },
}

/// Number of bytes `c` occupies when encoded as UTF-8
fn utf8_width(c: char) -> usize {
    match c as u32 {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Translates UTF-8 byte offsets into char positions within one text.
///
/// Entry `b` of the table holds the char position of the scalar whose
/// encoding contains byte `b`. Offsets at or past the end of the table map
/// to the position after the last char.
#[derive(Debug, Clone)]
pub struct OffsetMapper {
    table: Vec<usize>,
    char_len: usize,
}

impl OffsetMapper {
    /// Build the byte-to-char table for `text`
    pub fn new(text: &str) -> Self {
        let mut table = Vec::with_capacity(text.len());
        let mut char_len = 0;

        for (position, c) in text.chars().enumerate() {
            table.extend(std::iter::repeat(position).take(utf8_width(c)));
            char_len = position + 1;
        }

        Self { table, char_len }
    }

    /// Length of the mapped text in UTF-8 bytes
    pub fn byte_len(&self) -> usize {
        self.table.len()
    }

    /// Length of the mapped text in chars
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Map a byte offset to a char position, clamping to the end of text
    pub fn translate(&self, byte_offset: usize) -> usize {
        self.table
            .get(byte_offset)
            .copied()
            .unwrap_or(self.char_len)
    }

    /// Map the byte span `[start, start + length)` to a half-open char range
    pub fn translate_range(&self, start: usize, length: usize) -> Result<Range<usize>, RangeError> {
        if self.is_empty() {
            return Err(RangeError::EmptyText);
        }
        if start > self.byte_len() {
            return Err(RangeError::StartOutOfBounds {
                start,
                byte_len: self.byte_len(),
            });
        }
        // Ends past the text clamp anyway, so saturating is exact here
        let end = start.saturating_add(length);

        Ok(self.translate(start)..self.translate(end))
    }
}
