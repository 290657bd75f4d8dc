use log::{debug, trace, warn};

use crate::diff_entry::DiffEntry;
use crate::offset_mapper::{OffsetMapper, RangeError};
use crate::running_buffer::RunningBuffer;

/// Options for interpreting a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    separator: char,
    line_fragments: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            separator: '\n',
            line_fragments: true,
        }
    }
}

impl InterpreterConfig {
    /// Set the unit that follows every entry and every rendered fragment
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set whether scored entries contribute their whole text to the change
    /// text, in addition to their highlight ranges. Scoring is unaffected.
    pub fn line_fragments(mut self, enabled: bool) -> Self {
        self.line_fragments = enabled;
        self
    }

    /// Interpret `entries` with this configuration
    pub fn interpret(self, entries: &[DiffEntry]) -> EditDetails {
        DiffInterpreter::new(self).interpret(entries)
    }
}

/// The outcome of interpreting a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDetails {
    /// Net change in size; positive when content was added
    pub size_delta: i64,

    /// Changed fragments in entry order, then range order
    pub change_text: Vec<String>,

    separator: char,
}

impl EditDetails {
    /// Check if the diff changed anything
    pub fn has_changes(&self) -> bool {
        self.size_delta != 0 || !self.change_text.is_empty()
    }

    /// Join the fragments, each followed by the separator
    pub fn render(&self) -> String {
        let mut result = String::new();
        for fragment in &self.change_text {
            result.push_str(fragment);
            result.push(self.separator);
        }
        result
    }
}

/// Turns diff entries into a size delta and the text that changed
#[derive(Debug, Clone, Default)]
pub struct DiffInterpreter {
    config: InterpreterConfig,
}

impl DiffInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interpret `entries` in order. Never fails; malformed highlight ranges
    /// are skipped.
    pub fn interpret(&self, entries: &[DiffEntry]) -> EditDetails {
        let mut buffer = RunningBuffer::new(self.config.separator);
        let mut size_delta: i64 = 0;
        let mut change_text = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let prefix_length = buffer.push_entry(&entry.text);
            trace!(
                "entry {} ({}) at prefix {}: {} ranges",
                index,
                entry.kind,
                prefix_length,
                entry.highlight_ranges.len()
            );

            if let Some(sign) = entry.kind.line_sign() {
                let line_delta = sign * (entry.char_len() as i64 + 1);
                size_delta = size_delta.saturating_add(line_delta);
                if self.config.line_fragments {
                    change_text.push(entry.text.clone());
                }
            }

            if entry.highlight_ranges.is_empty() {
                continue;
            }
            if entry.text.is_empty() {
                debug!(
                    "entry {} has {} highlight ranges but no text, skipping them",
                    index,
                    entry.highlight_ranges.len()
                );
                continue;
            }

            let mapper = OffsetMapper::new(&entry.text);
            for range in &entry.highlight_ranges {
                let scored = mapper
                    .translate_range(range.start, range.length)
                    .and_then(|chars| {
                        buffer
                            .fragment(prefix_length, chars.clone())
                            .ok_or(RangeError::OutsideBuffer {
                                start: chars.start,
                                end: chars.end,
                            })
                    })
                    .and_then(|fragment| {
                        range
                            .size_delta()
                            .and_then(|delta| size_delta.checked_add(delta))
                            .map(|total| (fragment, total))
                            .ok_or(RangeError::SizeOverflow {
                                length: range.length,
                            })
                    });

                match scored {
                    Ok((fragment, total)) => {
                        size_delta = total;
                        change_text.push(fragment);
                    }
                    Err(err) => {
                        warn!("skipping highlight range {:?} of entry {}: {}", range, index, err);
                    }
                }
            }
        }

        debug!(
            "interpreted {} entries: size delta {}, {} fragments",
            entries.len(),
            size_delta,
            change_text.len()
        );

        EditDetails {
            size_delta,
            change_text,
            separator: self.config.separator,
        }
    }
}
