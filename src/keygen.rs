//! Resource key suggestion.
//!
//! Converts arbitrary display text into a valid resource key slug. The result
//! may be empty for all-symbolic input; callers must reject empty keys before
//! writing anything.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Normalize display text into a resource key slug.
///
/// Lowercases the input, collapses every run of characters outside `[a-z0-9]`
/// into a single `_`, and trims leading/trailing underscores. Idempotent.
pub fn normalize_key(display: &str) -> String {
    let lowered = display.to_lowercase();
    let slug = NON_ALNUM_RUN_REGEX.replace_all(&lowered, "_");
    slug.trim_matches('_').to_string()
}

/// Suggest a key for an extracted literal from its template parts.
///
/// The literal segments between interpolated variables are joined with `"x"`
/// so that adjacent words stay separated in the slug even when a variable sat
/// between them.
pub fn suggest_key(template_parts: &[&str]) -> String {
    normalize_key(&template_parts.join("x"))
}
