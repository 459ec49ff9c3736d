#![deny(missing_docs)]

//! # Page Patching
//!
//! Text-level utilities for wiring the help popup into React page components.
//! No parsing happens here: every decision is a substring check or a line/regex
//! heuristic, and a missing anchor is reported rather than guessed around.
//!
//! - **fragments**: The boilerplate texts and their kinds.
//! - **guard**: Whole-file presence checks (idempotency).
//! - **locate**: Insertion-point heuristics.
//! - **inject**: Splicing a fragment at an insertion point.
//! - **imports**: Cleanup of duplicated import lines.
//! - **workflows**: The per-file recipe chaining the above.

/// Fragment kinds and templates.
pub mod fragments;

/// Idempotency checks.
pub mod guard;

/// Duplicate import cleanup.
pub mod imports;

/// Text splicing.
pub mod inject;

/// Insertion-point locators.
pub mod locate;

/// High-level patching workflows.
pub mod workflows;

pub use fragments::FragmentKind;
pub use guard::is_present;
pub use imports::remove_duplicate_imports;
pub use inject::inject;
pub use locate::{locate, InsertionPoint, MissingAnchor};
pub use workflows::{apply_fragment, patch_page, PagePatch, StepReport, StepStatus};
