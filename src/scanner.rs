//! Lexical string-literal scanning.
//!
//! Locates the quoted string surrounding a cursor position and splits out any
//! `$variable` interpolations into a positional `%N$s` format template. This
//! is a deliberate line-local heuristic, not a parser: escaped quotes and
//! strings spanning multiple lines are known blind spots, kept for parity
//! with the behavior users already rely on.
//!
//! All offsets in this module are absolute character offsets from the start
//! of the buffer, matching the host document interface.

use std::sync::LazyLock;

use regex::Regex;

/// Interpolated variable reference: `$` followed by an identifier.
static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([_a-zA-Z][_a-zA-Z0-9]*)").unwrap());

/// How many ancestor syntax nodes to inspect when deciding availability.
/// A tunable depth limit, not semantically justified.
pub const ANCESTOR_SCAN_DEPTH: usize = 5;

/// Node kind reported by hosts for string-template literals.
pub const STRING_TEMPLATE_KIND: &str = "STRING_TEMPLATE";

/// Immutable snapshot of where extraction was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 0-based line index.
    pub line: usize,
    /// 0-based character column within the line, clamped to line length.
    pub column: usize,
    /// Absolute character offset of the cursor from buffer start.
    pub global_offset: usize,
}

impl SourceLocation {
    /// Resolve a line/column pair against `text`, computing the absolute
    /// offset from cumulative line lengths plus the terminator width.
    pub fn resolve(
        text: &str,
        line: usize,
        column: usize,
        line_terminator: &str,
    ) -> Option<Self> {
        let terminator_width = line_terminator.chars().count();
        let mut line_start = 0usize;

        let mut lines = text.split(line_terminator);
        for _ in 0..line {
            let prior = lines.next()?;
            line_start += prior.chars().count() + terminator_width;
        }
        let column = column.min(lines.next()?.chars().count());

        Some(Self {
            line,
            column,
            global_offset: line_start + column,
        })
    }
}

/// A string literal located at the cursor, ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLiteral {
    /// Literal contents between (excluding) the quotes, interpolations intact.
    pub raw_contents: String,
    /// Contents with each `$var` replaced by a 1-indexed `%N$s` placeholder.
    pub template: String,
    /// Literal text segments between interpolations, in order.
    pub segments: Vec<String>,
    /// Interpolated identifiers in order of first appearance.
    pub variables: Vec<String>,
    /// Absolute offset of the opening quote.
    pub span_start: usize,
    /// Absolute offset one past the closing quote.
    pub span_end: usize,
}

/// Locate the quoted string around `(line, column)` in `text`.
///
/// Scans the cursor's line backward and forward for the nearest `"` on each
/// side. Returns `None` when the cursor is not between a quote pair on that
/// line. `column` is a 0-based character column; `line_terminator` is the
/// terminator the buffer uses (affects absolute offset math).
pub fn locate(
    text: &str,
    line: usize,
    column: usize,
    line_terminator: &str,
) -> Option<ExtractedLiteral> {
    let location = SourceLocation::resolve(text, line, column, line_terminator)?;
    let selected: Vec<char> = text.split(line_terminator).nth(line)?.chars().collect();

    let column = location.column;
    let line_start = location.global_offset - column;
    let string_start = selected[..column].iter().rposition(|&c| c == '"')?;
    let string_end = selected[column..].iter().position(|&c| c == '"')? + column;

    let raw_contents: String = selected[string_start + 1..string_end].iter().collect();
    let (segments, variables) = split_interpolations(&raw_contents);

    let template = segments
        .iter()
        .enumerate()
        .map(|(index, part)| {
            if index == 0 {
                part.clone()
            } else {
                format!("%{index}$s{part}")
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Some(ExtractedLiteral {
        raw_contents,
        template,
        segments,
        variables,
        span_start: line_start + string_start,
        span_end: line_start + string_end + 1,
    })
}

/// Split literal contents into plain segments and interpolated identifiers.
fn split_interpolations(contents: &str) -> (Vec<String>, Vec<String>) {
    let variables = VARIABLE_REGEX
        .captures_iter(contents)
        .map(|cap| cap[1].to_string())
        .collect();
    let segments = VARIABLE_REGEX
        .split(contents)
        .map(str::to_string)
        .collect();
    (segments, variables)
}

/// A syntactic element reported by the host editor, used only by the
/// availability predicate. Hosts expose the element under the cursor plus
/// its ancestor chain.
pub trait SyntaxElement {
    /// Host-reported node kind (e.g. `STRING_TEMPLATE`).
    fn kind(&self) -> &str;
    fn parent(&self) -> Option<&dyn SyntaxElement>;
}

/// Whether the extraction quick-action should be offered at `element`.
///
/// True when the containing file's language matches the configured source
/// language (case-insensitive) and any of the element's nearest
/// [`ANCESTOR_SCAN_DEPTH`] ancestors (including itself) is a string template.
pub fn extraction_available(
    element: &dyn SyntaxElement,
    file_language_id: &str,
    source_language: &str,
) -> bool {
    if !file_language_id.eq_ignore_ascii_case(source_language) {
        return false;
    }

    let mut current = element;
    for _ in 0..ANCESTOR_SCAN_DEPTH {
        if current.kind() == STRING_TEMPLATE_KIND {
            return true;
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return false,
        }
    }
    false
}
