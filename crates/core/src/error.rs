// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rn-core operations.

use thiserror::Error;

/// All possible errors that can occur while building a report model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required input: {}\n  hint: collected data must provide every required field", fields.join(", "))]
    MissingInput { fields: Vec<&'static str> },

    #[error("invalid category '{name}' in {audience} issues: {reason}")]
    InvalidCategory {
        name: String,
        audience: String,
        reason: String,
    },

    #[error("invalid audience: '{0}'\n  hint: valid audiences are: internal, external")]
    InvalidAudience(String),

    #[error("invalid error facet: '{0}'\n  hint: valid facets are: KnownIssue, FixVersion, Generic")]
    InvalidErrorFacet(String),

    #[error("{0}")]
    InvalidInput(String),
}

/// A specialized Result type for rn-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
