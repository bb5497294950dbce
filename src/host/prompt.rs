//! User-confirmation boundary.
//!
//! The extraction flow pauses once with everything it has gathered (the
//! suggested key, the format template, and the fresh resource index) and asks
//! the prompt to confirm. The prompt may hand back an edited key/value, pick
//! an existing key to reuse, or cancel the whole operation.

use crate::report;
use crate::resources::ResourceIndex;

/// Everything the confirmation step gets to see.
pub struct PromptRequest<'a> {
    /// Freshly parsed resource index, for duplicate display.
    pub index: &'a ResourceIndex,
    /// Key suggested from the literal text.
    pub proposed_key: String,
    /// Value proposed for the entry (the format template).
    pub proposed_value: String,
}

/// Outcome of the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Confirmed {
        key: String,
        value: String,
        /// True when an already-present key was chosen; no resource write or
        /// build sync happens in that case.
        reused_existing_key: bool,
    },
    Cancelled,
}

/// Dialog boundary consumed by the orchestrator.
pub trait Prompt {
    fn confirm(&self, request: &PromptRequest) -> PromptOutcome;
}

/// Non-interactive prompt driven by CLI flags.
///
/// Without `--force`, any duplicate match (same key, or another key already
/// holding the same value) cancels the extraction and the matches are printed
/// so the user can rerun with `--use-existing`.
pub struct FlagPrompt {
    pub key_override: Option<String>,
    pub value_override: Option<String>,
    pub use_existing: Option<String>,
    pub force: bool,
    pub quiet: bool,
}

impl Prompt for FlagPrompt {
    fn confirm(&self, request: &PromptRequest) -> PromptOutcome {
        if let Some(existing) = &self.use_existing {
            return match request.index.value_of(existing) {
                Some(value) => PromptOutcome::Confirmed {
                    key: existing.clone(),
                    value: value.to_string(),
                    reused_existing_key: true,
                },
                None => {
                    if !self.quiet {
                        report::warn(&format!(
                            "key `{existing}` does not exist in the resource file"
                        ));
                    }
                    PromptOutcome::Cancelled
                }
            };
        }

        let key = self
            .key_override
            .clone()
            .unwrap_or_else(|| request.proposed_key.clone());
        let value = self
            .value_override
            .clone()
            .unwrap_or_else(|| request.proposed_value.clone());

        let matches = request.index.matches(&key, &value);
        if !matches.is_empty() && !self.force {
            if !self.quiet {
                report::print_matches(&matches, request.index);
                report::warn(
                    "matching entries found; rerun with --use-existing <key> or --force",
                );
            }
            return PromptOutcome::Cancelled;
        }

        PromptOutcome::Confirmed {
            key,
            value,
            reused_existing_key: false,
        }
    }
}
