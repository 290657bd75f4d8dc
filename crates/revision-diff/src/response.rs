use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::diff_entry::DiffEntry;
use crate::interpreter::{DiffInterpreter, EditDetails};

/// The body returned by the revision compare endpoint.
///
/// Only the diff itself is kept; revision metadata is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResponse {
    #[serde(default)]
    pub diff: Vec<DiffEntry>,
}

impl DiffResponse {
    /// Decode a compare response body
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Failed to decode diff response")
    }

    /// Interpret the diff with the default configuration
    pub fn edit_details(&self) -> EditDetails {
        DiffInterpreter::default().interpret(&self.diff)
    }
}
