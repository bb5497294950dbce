//! End-to-end extraction flow.
//!
//! Planning is pure: the scanner, key suggestion, resource index, prompt, and
//! writer all run before any buffer or file is touched, so cancellation and
//! every error path leave the project untouched. Committing applies the
//! source edits as one transaction, writes the resource file, and fires the
//! build-task trigger.
//!
//! The resource index is parsed fresh on every invocation; the file may have
//! been edited externally since the last extraction, and the writer's own
//! duplicate check at plan time is the sole conflict guard.

use std::{fs, path::PathBuf};

use anyhow::Context;

use crate::config::Config;
use crate::error::ExtractError;
use crate::host::{BuildRunner, Document, Edit, FileDocument, Prompt, PromptOutcome, PromptRequest};
use crate::imports::plan_imports;
use crate::keygen;
use crate::resources::{InsertOutcome, ResourceIndex, insert_entry};
use crate::scanner::{self, ExtractedLiteral};

/// Import line always needed by the replacement expression.
const STRING_RESOURCE_IMPORT: &str = "import org.jetbrains.compose.resources.stringResource";

/// A pending write of the updated resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceWrite {
    pub path: PathBuf,
    pub updated_text: String,
    /// 0-indexed line the new entry lands on, for user feedback.
    pub line: usize,
}

/// Fully computed extraction, ready to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPlan {
    pub literal: ExtractedLiteral,
    pub key: String,
    pub value: String,
    pub reused_existing_key: bool,
    /// The expression replacing the literal.
    pub replacement: String,
    /// Literal replacement plus import insertions, applied as one transaction.
    pub source_edits: Vec<Edit>,
    /// True when the file has no import block; imports were not planned and
    /// must be added by hand.
    pub imports_skipped: bool,
    /// `None` when reusing an existing key.
    pub resource_write: Option<ResourceWrite>,
}

/// Result of the planning phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Cursor was not inside a quoted string; silent no-op.
    NotFound,
    /// The user (or flag prompt) declined; zero mutations.
    Cancelled,
    Planned(Box<ExtractionPlan>),
}

/// Orchestrates scan, confirmation, planning, and commit.
pub struct Extractor<'a> {
    config: &'a Config,
    project_root: PathBuf,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a Config, project_root: PathBuf) -> Self {
        Self {
            config,
            project_root,
        }
    }

    /// Plan the extraction at `(line, column)` (0-based) in `source_text`.
    ///
    /// Reads and parses the resource file, asks `prompt` to confirm, and
    /// computes every edit. Nothing is mutated.
    pub fn plan(
        &self,
        source_text: &str,
        line: usize,
        column: usize,
        prompt: &dyn Prompt,
    ) -> Result<ExtractionOutcome, ExtractError> {
        let terminator = &self.config.line_terminator;

        let Some(literal) = scanner::locate(source_text, line, column, terminator) else {
            return Ok(ExtractionOutcome::NotFound);
        };

        let resources_path = self.config.resources_file(&self.project_root);
        let resource_text = fs::read_to_string(&resources_path)?;
        let index = ResourceIndex::parse(&resource_text)?;

        let segments: Vec<&str> = literal.segments.iter().map(String::as_str).collect();
        let request = PromptRequest {
            index: &index,
            proposed_key: keygen::suggest_key(&segments),
            proposed_value: literal.template.clone(),
        };

        let (key, value, reused_existing_key) = match prompt.confirm(&request) {
            PromptOutcome::Cancelled => return Ok(ExtractionOutcome::Cancelled),
            PromptOutcome::Confirmed {
                key,
                value,
                reused_existing_key,
            } => (key, value, reused_existing_key),
        };

        if key.is_empty() {
            return Err(ExtractError::EmptyKey);
        }

        // The writer runs before any mutation so a duplicate key can never
        // leave the source referencing an entry that was never written.
        let resource_write = if reused_existing_key {
            None
        } else {
            match insert_entry(&resource_text, &key, &value, terminator)? {
                InsertOutcome::AlreadyExists => {
                    return Err(ExtractError::KeyAlreadyExists(key));
                }
                InsertOutcome::Inserted { updated_text, line } => Some(ResourceWrite {
                    path: resources_path,
                    updated_text,
                    line,
                }),
            }
        };

        let variables_part = if literal.variables.is_empty() {
            String::new()
        } else {
            format!(", {}", literal.variables.join(", "))
        };
        let replacement = format!("stringResource(Res.string.{key}{variables_part})");

        let package = &self.config.resources_package;
        let needed_imports = vec![
            STRING_RESOURCE_IMPORT.to_string(),
            format!("import {package}.{key}"),
            format!("import {package}.Res"),
        ];

        let lines: Vec<&str> = source_text.split(terminator.as_str()).collect();
        let imports_skipped = !lines.iter().any(|l| l.starts_with("import "));
        let import_patches = plan_imports(&lines, &needed_imports, terminator);

        let mut source_edits = vec![Edit::replace(
            literal.span_start,
            literal.span_end,
            replacement.clone(),
        )];
        source_edits.extend(
            import_patches
                .into_iter()
                .map(|p| Edit::insert(p.offset, p.text)),
        );

        Ok(ExtractionOutcome::Planned(Box::new(ExtractionPlan {
            literal,
            key,
            value,
            reused_existing_key,
            replacement,
            source_edits,
            imports_skipped,
            resource_write,
        })))
    }

    /// Commit a plan: splice the source buffer, write the resource file, and
    /// fire the build trigger.
    pub fn commit(
        &self,
        plan: &ExtractionPlan,
        source: &mut FileDocument,
        build: &dyn BuildRunner,
    ) -> anyhow::Result<()> {
        source.apply_edits(&plan.source_edits)?;
        source.save()?;

        if let Some(write) = &plan.resource_write {
            fs::write(&write.path, &write.updated_text)
                .with_context(|| format!("Failed to write {}", write.path.display()))?;
            build.trigger_task(&self.project_root, &self.config.build_task);
        }

        Ok(())
    }
}
