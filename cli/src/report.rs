#![deny(missing_docs)]

//! # Console Rendering
//!
//! Turns batch reports into the human-readable status stream.

use pagepatch_core::{BatchReport, FileOutcome, FileReport, FragmentKind, StepStatus};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Which batch produced the report; only affects wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fragment injection.
    Patch,
    /// Duplicate import cleanup.
    Dedupe,
}

fn step_line(kind: FragmentKind, status: &StepStatus) -> String {
    let noun = kind.to_string();
    match status {
        StepStatus::Added => format!("  ✓ Added {}", noun),
        StepStatus::AlreadyPresent => {
            let mut capitalized = noun;
            capitalized[..1].make_ascii_uppercase();
            format!("  ✓ {} already present", capitalized)
        }
        StepStatus::AnchorNotFound(missing) => format!("  ⚠ {}", missing),
    }
}

fn render_file(out: &mut String, file: &FileReport, mode: Mode) -> std::fmt::Result {
    if file.outcome == FileOutcome::NotFound {
        return writeln!(out, "✗ {}: File not found", file.file);
    }

    if mode == Mode::Patch {
        writeln!(out, "Updating {} (pageKey: {})...", file.file, file.tag)?;
    }
    for step in &file.steps {
        writeln!(out, "{}", step_line(step.kind, &step.status))?;
    }

    match (&file.outcome, mode) {
        (FileOutcome::Updated, Mode::Patch) => {
            writeln!(out, "✓ {} updated successfully\n", file.file)
        }
        (FileOutcome::Updated, Mode::Dedupe) => {
            writeln!(out, "✓ {}: Removed duplicate imports", file.file)
        }
        (FileOutcome::UpToDate, Mode::Patch) => {
            writeln!(out, "→ {} already up to date\n", file.file)
        }
        (FileOutcome::UpToDate, Mode::Dedupe) => {
            writeln!(out, "→ {}: No duplicates found", file.file)
        }
        (FileOutcome::Failed(message), _) => {
            writeln!(out, "✗ Error updating {}: {}\n", file.file, message)
        }
        (FileOutcome::NotFound, _) => Ok(()),
    }
}

/// Renders the whole report: per-file lines followed by the summary block.
pub fn render_text(report: &BatchReport, mode: Mode) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_into(&mut out, report, mode);
    out
}

fn render_into(out: &mut String, report: &BatchReport, mode: Mode) -> std::fmt::Result {
    for file in &report.files {
        render_file(out, file, mode)?;
    }

    let rule = "=".repeat(RULE_WIDTH);
    let summary = &report.summary;
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Updated: {}", summary.updated)?;
    writeln!(out, "  Skipped: {}", summary.skipped)?;
    if summary.not_found > 0 {
        writeln!(out, "    (not found: {})", summary.not_found)?;
    }
    writeln!(out, "  Errors: {}", summary.errors)?;
    writeln!(out, "{}", rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepatch_core::{MissingAnchor, StepReport};

    fn report_with(files: Vec<FileReport>) -> BatchReport {
        let mut report = BatchReport::default();
        for f in files {
            match &f.outcome {
                FileOutcome::Updated => report.summary.updated += 1,
                FileOutcome::UpToDate => report.summary.skipped += 1,
                FileOutcome::NotFound => {
                    report.summary.skipped += 1;
                    report.summary.not_found += 1;
                }
                FileOutcome::Failed(_) => report.summary.errors += 1,
            }
            report.files.push(f);
        }
        report
    }

    #[test]
    fn test_render_patch_report() {
        let report = report_with(vec![
            FileReport {
                file: "WordsPage.tsx".into(),
                tag: "words".into(),
                steps: vec![
                    StepReport {
                        kind: FragmentKind::Imports,
                        status: StepStatus::AlreadyPresent,
                    },
                    StepReport {
                        kind: FragmentKind::Hook,
                        status: StepStatus::Added,
                    },
                    StepReport {
                        kind: FragmentKind::Component,
                        status: StepStatus::AnchorNotFound(MissingAnchor::NoClosingBlock),
                    },
                ],
                outcome: FileOutcome::Updated,
            },
            FileReport {
                file: "GonePage.tsx".into(),
                tag: "gone".into(),
                steps: vec![],
                outcome: FileOutcome::NotFound,
            },
        ]);

        let text = render_text(&report, Mode::Patch);

        assert!(text.contains("Updating WordsPage.tsx (pageKey: words)..."));
        assert!(text.contains("  ✓ Imports already present\n"));
        assert!(text.contains("  ✓ Added hook\n"));
        assert!(text.contains("  ⚠ Could not find closing pattern\n"));
        assert!(text.contains("✓ WordsPage.tsx updated successfully"));
        assert!(text.contains("✗ GonePage.tsx: File not found"));
        assert!(text.contains("  Updated: 1\n  Skipped: 1\n    (not found: 1)\n  Errors: 0\n"));
    }

    #[test]
    fn test_render_failure_and_dedupe_wording() {
        let report = report_with(vec![
            FileReport {
                file: "APage.tsx".into(),
                tag: "a".into(),
                steps: vec![],
                outcome: FileOutcome::Failed("IO Error: denied".into()),
            },
            FileReport {
                file: "BPage.tsx".into(),
                tag: "b".into(),
                steps: vec![],
                outcome: FileOutcome::UpToDate,
            },
        ]);

        let text = render_text(&report, Mode::Dedupe);

        assert!(text.contains("✗ Error updating APage.tsx: IO Error: denied"));
        assert!(text.contains("→ BPage.tsx: No duplicates found"));
        assert!(!text.contains("Updating BPage.tsx"));
        assert!(!text.contains("not found:"));
    }
}
