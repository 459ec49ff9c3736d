#![deny(missing_docs)]

//! # Batch Runner
//!
//! Walks the catalog in order, patches each page, and collects one structured
//! report per file. A failure on one file is recorded and the batch moves on;
//! nothing here prints.

use crate::config::{BatchConfig, CatalogEntry, FragmentSet};
use crate::error::{AppError, AppResult};
use crate::patcher::{patch_page, remove_duplicate_imports, StepReport};
use derive_more::Display;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Final state of one catalog entry.
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Content changed and was written back.
    #[display("updated")]
    Updated,
    /// Nothing to change; the file was not written.
    #[display("up to date")]
    UpToDate,
    /// The file does not exist under the root.
    #[display("file not found")]
    NotFound,
    /// Reading, transforming or writing failed.
    #[display("error: {_0}")]
    Failed(String),
}

/// What happened to one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// File name from the catalog.
    pub file: String,
    /// Page key from the catalog.
    pub tag: String,
    /// Fragment steps, empty when the file was never read.
    pub steps: Vec<StepReport>,
    /// Outcome.
    pub outcome: FileOutcome,
}

/// Batch counters.
///
/// `updated + skipped + errors` always equals the number of files processed.
/// Missing files are counted as skipped and additionally in `not_found`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Files written back.
    pub updated: usize,
    /// Files left untouched, including missing ones.
    pub skipped: usize,
    /// Files that failed.
    pub errors: usize,
    /// Subset of `skipped` whose file did not exist.
    pub not_found: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::UpToDate => self.skipped += 1,
            FileOutcome::NotFound => {
                self.skipped += 1;
                self.not_found += 1;
            }
            FileOutcome::Failed(_) => self.errors += 1,
        }
    }

    /// Number of files accounted for.
    pub fn total(&self) -> usize {
        self.updated + self.skipped + self.errors
    }
}

/// Reports for a whole run, in catalog order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// One report per catalog entry.
    pub files: Vec<FileReport>,
    /// Tally over `files`.
    pub summary: BatchSummary,
}

impl BatchReport {
    fn push(&mut self, report: FileReport) {
        self.summary.record(&report.outcome);
        self.files.push(report);
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read → transform → write-if-changed for one file.
///
/// A missing file yields [`FileOutcome::NotFound`] without touching the disk.
fn process_file<F>(path: &Path, entry: &CatalogEntry, transform: F) -> AppResult<FileReport>
where
    F: FnOnce(&str) -> (String, Vec<StepReport>),
{
    let mut report = FileReport {
        file: entry.file.clone(),
        tag: entry.tag.clone(),
        steps: Vec::new(),
        outcome: FileOutcome::NotFound,
    };

    if !path.exists() {
        return Ok(report);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read file {:?}: {}", path, e)))?;

    let (new_content, steps) = transform(&content);
    report.steps = steps;

    if new_content != content {
        fs::write(path, new_content)
            .map_err(|e| AppError::General(format!("Failed to write file {:?}: {}", path, e)))?;
        report.outcome = FileOutcome::Updated;
    } else {
        report.outcome = FileOutcome::UpToDate;
    }

    Ok(report)
}

/// Patches a single page with the selected fragments.
pub fn update_page(
    root: &Path,
    entry: &CatalogEntry,
    fragments: &FragmentSet,
) -> AppResult<FileReport> {
    process_file(&root.join(&entry.file), entry, |content| {
        let patch = patch_page(content, &entry.tag, fragments);
        (patch.content, patch.steps)
    })
}

/// Removes duplicated help-popup imports from a single page.
pub fn dedupe_page(root: &Path, entry: &CatalogEntry) -> AppResult<FileReport> {
    process_file(&root.join(&entry.file), entry, |content| {
        (remove_duplicate_imports(content), Vec::new())
    })
}

fn run_each<F>(config: &BatchConfig, mut per_file: F) -> BatchReport
where
    F: FnMut(&CatalogEntry) -> AppResult<FileReport>,
{
    let mut report = BatchReport::default();

    for entry in config.catalog.entries() {
        let file_report = per_file(entry).unwrap_or_else(|e| FileReport {
            file: entry.file.clone(),
            tag: entry.tag.clone(),
            steps: Vec::new(),
            outcome: FileOutcome::Failed(e.to_string()),
        });
        report.push(file_report);
    }

    report
}

/// Patches every catalog entry, sequentially and in catalog order.
pub fn run_batch(config: &BatchConfig) -> BatchReport {
    run_each(config, |entry| {
        update_page(&config.root, entry, &config.fragments)
    })
}

/// Runs duplicate-import cleanup over every catalog entry.
pub fn run_dedupe(config: &BatchConfig) -> BatchReport {
    run_each(config, |entry| dedupe_page(&config.root, entry))
}
