//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (read/write of a page file).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Invalid catalog or batch configuration.
    #[from(ignore)]
    #[display("Catalog Error: {_0}")]
    Catalog(String),

    /// Catalog file could not be deserialized.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Report could not be serialized.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
