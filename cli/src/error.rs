#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use pagepatch_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Error raised by the core library (catalog loading, report encoding).
    #[display("{}", _0)]
    Core(AppError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `General(String)`
/// variant contains a `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
