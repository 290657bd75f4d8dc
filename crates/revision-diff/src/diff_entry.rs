use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the text of a diff entry relates to the older revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "i64", into = "i64")
)]
pub enum DiffEntryKind {
    /// The line is identical in both revisions
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// The line only exists in the newer revision
    #[display(fmt = "LineAdded")]
    LineAdded,

    /// The line only exists in the older revision
    #[display(fmt = "LineRemoved")]
    LineRemoved,

    /// The line exists in both revisions with in-line changes.
    /// Only its highlight ranges carry information.
    #[display(fmt = "LineWithDiff")]
    LineWithDiff,

    /// A paragraph that was moved away from this position
    #[display(fmt = "ParagraphMovedFrom")]
    ParagraphMovedFrom,

    /// A paragraph that was moved to this position
    #[display(fmt = "ParagraphMovedTo")]
    ParagraphMovedTo,

    /// A kind code this crate does not know about
    #[display(fmt = "Other({})", _0)]
    Other(i64),
}

impl DiffEntryKind {
    /// Sign of the whole-entry contribution to the size delta, if any.
    ///
    /// Kinds that return `None` are inert: they occupy buffer space but are
    /// neither scored nor extracted as a whole.
    pub fn line_sign(self) -> Option<i64> {
        match self {
            DiffEntryKind::LineAdded | DiffEntryKind::ParagraphMovedTo => Some(1),
            DiffEntryKind::LineRemoved | DiffEntryKind::ParagraphMovedFrom => Some(-1),
            DiffEntryKind::Unchanged | DiffEntryKind::LineWithDiff | DiffEntryKind::Other(_) => {
                None
            }
        }
    }

    /// Check if entries of this kind are scored as a whole
    pub fn is_scored(self) -> bool {
        self.line_sign().is_some()
    }
}

impl From<i64> for DiffEntryKind {
    fn from(code: i64) -> Self {
        match code {
            0 => DiffEntryKind::Unchanged,
            1 => DiffEntryKind::LineAdded,
            2 => DiffEntryKind::LineRemoved,
            3 => DiffEntryKind::LineWithDiff,
            4 => DiffEntryKind::ParagraphMovedFrom,
            5 => DiffEntryKind::ParagraphMovedTo,
            other => DiffEntryKind::Other(other),
        }
    }
}

impl From<DiffEntryKind> for i64 {
    fn from(kind: DiffEntryKind) -> Self {
        match kind {
            DiffEntryKind::Unchanged => 0,
            DiffEntryKind::LineAdded => 1,
            DiffEntryKind::LineRemoved => 2,
            DiffEntryKind::LineWithDiff => 3,
            DiffEntryKind::ParagraphMovedFrom => 4,
            DiffEntryKind::ParagraphMovedTo => 5,
            DiffEntryKind::Other(code) => code,
        }
    }
}

/// Whether a highlight range marks inserted or deleted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "i64", into = "i64")
)]
pub enum HighlightKind {
    #[display(fmt = "Addition")]
    Addition,

    #[display(fmt = "Removal")]
    Removal,
}

impl HighlightKind {
    /// Sign of this highlight's contribution to the size delta
    pub fn sign(self) -> i64 {
        match self {
            HighlightKind::Addition => 1,
            HighlightKind::Removal => -1,
        }
    }
}

impl From<i64> for HighlightKind {
    fn from(code: i64) -> Self {
        // Anything that is not an addition is scored as a removal
        if code == 0 {
            HighlightKind::Addition
        } else {
            HighlightKind::Removal
        }
    }
}

impl From<HighlightKind> for i64 {
    fn from(kind: HighlightKind) -> Self {
        match kind {
            HighlightKind::Addition => 0,
            HighlightKind::Removal => 1,
        }
    }
}

/// A sub-span of an entry's text, addressed in UTF-8 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightRange {
    /// Byte offset into the UTF-8 encoding of the entry text
    pub start: usize,

    /// Length in bytes. `start + length` may run past the end of the text.
    pub length: usize,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: HighlightKind,
}

impl HighlightRange {
    pub fn new(start: usize, length: usize, kind: HighlightKind) -> Self {
        Self {
            start,
            length,
            kind,
        }
    }

    pub fn addition(start: usize, length: usize) -> Self {
        Self::new(start, length, HighlightKind::Addition)
    }

    pub fn removal(start: usize, length: usize) -> Self {
        Self::new(start, length, HighlightKind::Removal)
    }

    /// Signed contribution of this range to the size delta, or `None` when
    /// the length does not fit in an `i64`
    pub fn size_delta(&self) -> Option<i64> {
        i64::try_from(self.length)
            .ok()
            .map(|length| self.kind.sign() * length)
    }
}

/// One unit of a revision comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiffEntry {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: DiffEntryKind,

    /// Line number reported by the diff source, if any
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub line_number: Option<u32>,

    /// The text of the line or paragraph, without its trailing line break
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,

    /// Finer-grained spans within `text`, in source order
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlight_ranges: Vec<HighlightRange>,
}

impl DiffEntry {
    /// Create an entry without highlight ranges
    pub fn new(kind: DiffEntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            line_number: None,
            text: text.into(),
            highlight_ranges: Vec::new(),
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(DiffEntryKind::Unchanged, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(DiffEntryKind::LineAdded, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(DiffEntryKind::LineRemoved, text)
    }

    pub fn moved_from(text: impl Into<String>) -> Self {
        Self::new(DiffEntryKind::ParagraphMovedFrom, text)
    }

    pub fn moved_to(text: impl Into<String>) -> Self {
        Self::new(DiffEntryKind::ParagraphMovedTo, text)
    }

    /// Attach a highlight range
    pub fn with_range(mut self, range: HighlightRange) -> Self {
        self.highlight_ranges.push(range);
        self
    }

    pub fn with_line_number(mut self, line_number: u32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Length of the text in chars
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
