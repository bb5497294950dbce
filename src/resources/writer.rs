//! Sorted insertion of new entries into `strings.xml` text.
//!
//! The writer never reserializes the document: it splices a single new line
//! into the existing text so that unrelated formatting, comments, and entry
//! order are left untouched. Entries are assumed sorted by name ascending and
//! the new line is placed to keep it that way.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

/// An entry line, capturing the resource key.
static ENTRY_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[ \t]*<string +name="([^"]+)".*$"#).unwrap());

/// Characters that force CDATA wrapping of the value.
static RESERVED_CHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[<>'"&]"#).unwrap());

/// Closing line of the entry container.
const RESOURCES_END_TAG: &str = "</resources>";

/// Result of planning an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The new entry line was spliced in; `line` is the 0-indexed line number
    /// it landed on (for user feedback only).
    Inserted { updated_text: String, line: usize },
    /// The key is already present; the file must not be written.
    AlreadyExists,
}

/// Plan the insertion of `key`/`value` into `file_text`.
///
/// Scans line by line: an existing entry with the same key aborts with
/// [`InsertOutcome::AlreadyExists`]; the first entry whose key sorts after
/// the new one marks the insertion point; failing that, the line holding
/// `</resources>` does. A file with no closing tag and no insertion point is
/// an error, never a silent append.
///
/// Values containing any of `< > ' " &` are wrapped in a CDATA block as a
/// whole; no per-character entity escaping is performed. Existing files were
/// written under this all-or-nothing policy and mixing the two styles would
/// produce spurious diffs.
pub fn insert_entry(
    file_text: &str,
    key: &str,
    value: &str,
    line_terminator: &str,
) -> Result<InsertOutcome, ExtractError> {
    let terminator_width = line_terminator.chars().count();

    let value_part = if RESERVED_CHAR_REGEX.is_match(value) {
        format!("<![CDATA[{value}]]>")
    } else {
        value.to_string()
    };
    let line_to_insert = format!("    <string name=\"{key}\">{value_part}</string>");

    let mut position = 0usize;
    let mut current_line = 0usize;
    let mut insertion_point = None;

    for line in file_text.split(line_terminator) {
        if let Some(captures) = ENTRY_LINE_REGEX.captures(line) {
            let line_key = &captures[1];
            match line_key.cmp(key) {
                std::cmp::Ordering::Equal => return Ok(InsertOutcome::AlreadyExists),
                std::cmp::Ordering::Greater => {
                    insertion_point = Some((position, current_line));
                    break;
                }
                std::cmp::Ordering::Less => {}
            }
        } else if line.contains(RESOURCES_END_TAG) {
            insertion_point = Some((position, current_line));
            break;
        }

        position += line.chars().count() + terminator_width;
        current_line += 1;
    }

    let (position, line) = insertion_point.ok_or(ExtractError::MissingClosingTag)?;

    let byte_position = file_text
        .char_indices()
        .nth(position)
        .map(|(i, _)| i)
        .unwrap_or(file_text.len());

    let mut updated_text = file_text.to_string();
    updated_text.insert_str(byte_position, &format!("{line_to_insert}{line_terminator}"));

    Ok(InsertOutcome::Inserted { updated_text, line })
}
