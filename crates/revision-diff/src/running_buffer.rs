use ropey::Rope;
use std::ops::Range;

/// Append-only concatenation of entry texts, each followed by a separator.
///
/// Positions are char indices. `push_entry` returns the prefix length at
/// which the entry starts, so entry-relative ranges can be shifted into the
/// buffer without keeping per-entry state around.
#[derive(Debug, Clone)]
pub struct RunningBuffer {
    text: Rope,
    separator: char,
}

impl RunningBuffer {
    pub fn new(separator: char) -> Self {
        Self {
            text: Rope::new(),
            separator,
        }
    }

    /// Append an entry followed by the separator and return its prefix length.
    ///
    /// Empty text is stored as a single separator placeholder.
    pub fn push_entry(&mut self, text: &str) -> usize {
        let prefix_length = self.len_chars();
        if text.is_empty() {
            self.text.insert_char(prefix_length, self.separator);
        } else {
            self.text.insert(prefix_length, text);
        }
        let end = self.len_chars();
        self.text.insert_char(end, self.separator);
        prefix_length
    }

    /// Current prefix length in chars
    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Copy out `range` shifted by `prefix_length`, or `None` if it falls
    /// outside the buffer
    pub fn fragment(&self, prefix_length: usize, range: Range<usize>) -> Option<String> {
        let start = prefix_length.checked_add(range.start)?;
        let end = prefix_length.checked_add(range.end)?;
        if start > end {
            return None;
        }
        self.text.get_slice(start..end).map(|slice| slice.to_string())
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}
