//! User-facing output formatting.
//!
//! Kept separate from the core logic so the crate can be used as a library
//! without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::extract::ExtractionPlan;
use crate::resources::ResourceIndex;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn warn(message: &str) {
    eprintln!("{}: {}", "warning".bold().yellow(), message);
}

/// Print duplicate matches found for a proposed entry.
pub fn print_matches(matches: &std::collections::BTreeSet<String>, index: &ResourceIndex) {
    println!("{}", "Match found in resource file:".bold());
    for key in matches {
        let value = index.value_of(key).unwrap_or("");
        println!("  {}: {}", key.bold().cyan(), value);
    }
}

/// Print the literal's location with a caret marking the span on its line.
fn print_location(file_path: &str, line: usize, plan: &ExtractionPlan, source_text: &str) {
    let Some(source_line) = source_text.lines().nth(line) else {
        return;
    };

    // 1-based for display, clickable path:line:col.
    let line_display = line + 1;
    println!("  {} {}:{}", "-->".blue(), file_path, line_display);

    let line_width = line_display.to_string().len();
    println!("{:>width$} {}", "", "|".blue(), width = line_width);
    println!(
        "{:>width$} {} {}",
        line_display.to_string().blue(),
        "|".blue(),
        source_line,
        width = line_width
    );

    // Caret under the literal; use display width so CJK text lines up.
    let terminator_width = if source_text.contains("\r\n") { 2 } else { 1 };
    let line_start = source_text
        .lines()
        .take(line)
        .map(|l| l.chars().count() + terminator_width)
        .sum::<usize>();
    let col = plan.literal.span_start.saturating_sub(line_start);
    let prefix: String = source_line.chars().take(col).collect();
    let padding = UnicodeWidthStr::width(prefix.as_str());
    let span_chars = plan.literal.span_end - plan.literal.span_start;
    println!(
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".repeat(span_chars).yellow(),
        width = line_width,
        padding = padding
    );
}

/// Preview a planned extraction without applying it.
pub fn print_preview(plan: &ExtractionPlan, file_path: &str, line: usize, source_text: &str) {
    println!(
        "{}: would extract {} as {}",
        "dry-run".bold().cyan(),
        format!("\"{}\"", plan.literal.raw_contents).green(),
        plan.key.bold()
    );
    print_location(file_path, line, plan, source_text);

    println!("  replace with: {}", plan.replacement.green());
    if plan.imports_skipped {
        warn("file has no import block; imports must be added by hand");
    }
    match &plan.resource_write {
        Some(write) => println!(
            "  resource: {} {} at line {}",
            write.path.display(),
            format!("+ <string name=\"{}\">", plan.key).green(),
            write.line + 1
        ),
        None => println!("  resource: reusing existing key {}", plan.key.bold().cyan()),
    }
    println!("\nRun again with {} to apply.", "--apply".bold());
}

/// Report a committed extraction.
pub fn print_applied(plan: &ExtractionPlan, file_path: &str) {
    println!(
        "{} extracted {} as {}",
        SUCCESS_MARK.green(),
        format!("\"{}\"", plan.literal.raw_contents).green(),
        plan.key.bold()
    );
    println!("  {} updated", file_path);
    if plan.imports_skipped {
        warn("file has no import block; imports must be added by hand");
    }
    if let Some(write) = &plan.resource_write {
        println!(
            "  {} added {} at line {}",
            write.path.display(),
            plan.key.bold().cyan(),
            write.line + 1
        );
    }
}

/// Print resource entries for the lookup command.
pub fn print_entries(entries: &[(&str, &str)], index: &ResourceIndex) {
    for (key, value) in entries {
        println!("{}: {}", key.bold().cyan(), value);
    }
    println!(
        "{} distinct resource string{}",
        index.len(),
        if index.len() == 1 { "" } else { "s" }
    );
}
