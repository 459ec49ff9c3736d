#![deny(missing_docs)]

//! # Pagepatch Core
//!
//! Core library for wiring the help popup into a catalog of React page
//! components: idempotency guards, insertion-point heuristics, text splicing
//! and the batch runner that ties them to the file system.

/// Shared error types.
pub mod error;

/// Catalog and batch configuration.
pub mod config;

/// Text patching utilities.
pub mod patcher;

/// Batch execution and per-file reports.
pub mod runner;

pub use config::{BatchConfig, Catalog, CatalogEntry, FragmentSet, DEFAULT_ROOT};
pub use error::{AppError, AppResult};
pub use patcher::{
    inject, is_present, locate, patch_page, remove_duplicate_imports, FragmentKind,
    InsertionPoint, MissingAnchor, PagePatch, StepReport, StepStatus,
};
pub use runner::{
    dedupe_page, run_batch, run_dedupe, update_page, BatchReport, BatchSummary, FileOutcome,
    FileReport,
};
