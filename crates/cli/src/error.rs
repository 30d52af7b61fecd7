// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rnrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration found (searched: {searched})\n  hint: pass --config <path> or create relnotes.toml")]
    ConfigNotFound { searched: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("invalid snapshot {path}: {reason}")]
    InvalidSnapshot { path: String, reason: String },

    #[error("{0}")]
    Report(#[from] rn_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rnrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
