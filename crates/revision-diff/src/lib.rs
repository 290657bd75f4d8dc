// Revision diff interpretation for edit history views
// This crate turns precomputed diff entries into a size delta and the changed text

mod diff_entry;
mod interpreter;
mod offset_mapper;
#[cfg(feature = "serde")]
mod response;
mod running_buffer;

pub use diff_entry::{DiffEntry, DiffEntryKind, HighlightKind, HighlightRange};
pub use interpreter::{DiffInterpreter, EditDetails, InterpreterConfig};
pub use offset_mapper::{OffsetMapper, RangeError};
#[cfg(feature = "serde")]
pub use response::DiffResponse;
pub use running_buffer::RunningBuffer;
