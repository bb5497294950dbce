//! Command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::args::{Arguments, Command, ExtractCommand, LookupCommand};
use crate::cli::exit_status::ExitStatus;
use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::extract::{ExtractionOutcome, Extractor};
use crate::host::{Document, FileDocument, FlagPrompt, GradleRunner};
use crate::report;
use crate::resources::ResourceIndex;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    match args.command.expect("command presence checked by caller") {
        Command::Init => init(),
        Command::Lookup(cmd) => lookup(&cmd),
        Command::Extract(cmd) => extract(&cmd),
    }
}

/// Project root is the directory holding the config file, falling back to
/// the working directory when running on defaults.
fn load_project(start_dir: &Path) -> Result<(Config, PathBuf)> {
    let loaded = config::load_config(start_dir)?;
    let root = config::find_config_file(start_dir)
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| start_dir.to_path_buf());
    Ok((loaded.config, root))
}

fn init() -> Result<ExitStatus> {
    let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if path.exists() {
        report::warn(&format!("{CONFIG_FILE_NAME} already exists"));
        return Ok(ExitStatus::Failure);
    }

    let json = config::default_config_json()?;
    std::fs::write(&path, format!("{json}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} created {}",
        report::SUCCESS_MARK.green(),
        CONFIG_FILE_NAME.bold()
    );
    Ok(ExitStatus::Success)
}

fn lookup(cmd: &LookupCommand) -> Result<ExitStatus> {
    let cwd = std::env::current_dir()?;
    let (config, root) = load_project(&cwd)?;

    let resources_path = config.resources_file(&root);
    let text = std::fs::read_to_string(&resources_path)
        .with_context(|| format!("Failed to read {}", resources_path.display()))?;
    let index = ResourceIndex::parse(&text)?;

    if cmd.key.is_none() && cmd.value.is_none() {
        report::print_entries(&index.entries(), &index);
        return Ok(ExitStatus::Success);
    }

    let mut matches = std::collections::BTreeSet::new();
    if let Some(key) = &cmd.key {
        if index.value_of(key).is_some() {
            matches.insert(key.clone());
        }
    }
    if let Some(value) = &cmd.value {
        matches.extend(index.keys_with_value(value));
    }
    if matches.is_empty() {
        println!("{} no matching entries", report::FAILURE_MARK.red());
        return Ok(ExitStatus::Failure);
    }

    report::print_matches(&matches, &index);
    Ok(ExitStatus::Success)
}

fn extract(cmd: &ExtractCommand) -> Result<ExitStatus> {
    if cmd.line == 0 || cmd.column == 0 {
        bail!("--line and --column are 1-based");
    }
    let line = cmd.line - 1;
    let column = cmd.column - 1;

    let cwd = std::env::current_dir()?;
    let (config, root) = load_project(&cwd)?;

    let mut document = FileDocument::open(&cmd.file)?;
    let extractor = Extractor::new(&config, root);
    let prompt = FlagPrompt {
        key_override: cmd.key.clone(),
        value_override: cmd.value.clone(),
        use_existing: cmd.use_existing.clone(),
        force: cmd.force,
        quiet: false,
    };

    match extractor.plan(document.text(), line, column, &prompt)? {
        // Cursor not inside a string literal: silent no-op.
        ExtractionOutcome::NotFound => Ok(ExitStatus::Success),
        ExtractionOutcome::Cancelled => Ok(ExitStatus::Failure),
        ExtractionOutcome::Planned(plan) => {
            let file_display = cmd.file.display().to_string();
            if cmd.apply {
                extractor.commit(&plan, &mut document, &GradleRunner)?;
                report::print_applied(&plan, &file_display);
            } else {
                report::print_preview(&plan, &file_display, line, document.text());
            }
            Ok(ExitStatus::Success)
        }
    }
}
