//! Text-buffer boundary.
//!
//! Edits are expressed as offset ranges over the buffer's current text and
//! applied as one transaction: either every edit lands or none does. Offsets
//! are absolute character offsets from the start of the buffer, matching what
//! the scanner and import planner produce.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::error::ExtractError;

/// A single splice: replace `start..end` with `text`.
///
/// `start == end` is a pure insertion. Offsets are character offsets into the
/// text the edit set was computed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Edit {
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            start: offset,
            end: offset,
            text: text.into(),
        }
    }
}

/// A mutable text buffer supporting transactional edits.
pub trait Document {
    fn text(&self) -> &str;

    /// Apply all `edits` as a single transaction.
    ///
    /// Offsets refer to the text as it was when the edits were computed;
    /// ranges must not overlap. On error the buffer is unchanged.
    fn apply_edits(&mut self, edits: &[Edit]) -> Result<(), ExtractError>;
}

/// Splice `edits` into `text`, back to front so earlier offsets stay valid.
///
/// Insertions sharing an offset are applied in lexicographic order of their
/// text, which keeps independently planned import insertions sorted.
pub fn apply_edits_to_text(text: &str, edits: &[Edit]) -> Result<String, ExtractError> {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| (a.start, a.end, &a.text).cmp(&(b.start, b.end, &b.text)));

    let total_chars = text.chars().count();
    for window in ordered.windows(2) {
        if window[1].start < window[0].end {
            return Err(ExtractError::InvalidEdit(format!(
                "overlapping edits at offsets {} and {}",
                window[0].start, window[1].start
            )));
        }
    }

    let mut result = text.to_string();
    for edit in ordered.iter().rev() {
        if edit.start > edit.end || edit.end > total_chars {
            return Err(ExtractError::InvalidEdit(format!(
                "edit range {}..{} exceeds buffer length {}",
                edit.start, edit.end, total_chars
            )));
        }
        let start_byte = char_to_byte(&result, edit.start);
        let end_byte = char_to_byte(&result, edit.end);
        result.replace_range(start_byte..end_byte, &edit.text);
    }
    Ok(result)
}

fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// A file-backed [`Document`].
///
/// Mirrors an open editor buffer: edits mutate the in-memory text and
/// [`save`](Self::save) flushes the whole buffer to disk in one write.
pub struct FileDocument {
    path: PathBuf,
    text: String,
}

impl FileDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn from_text(path: &Path, text: String) -> Self {
        Self {
            path: path.to_path_buf(),
            text,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, &self.text)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}

impl Document for FileDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn apply_edits(&mut self, edits: &[Edit]) -> Result<(), ExtractError> {
        self.text = apply_edits_to_text(&self.text, edits)?;
        Ok(())
    }
}
