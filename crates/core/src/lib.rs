// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rn-core: Report model engine for relnotes
//!
//! This crate turns already-collected issue-tracker and commit data into the
//! read-only model a release notes renderer consumes. It performs no I/O.

pub mod category;
pub mod defect;
pub mod error;
pub mod issue;
pub mod merge;
pub mod model;
pub mod query;
pub mod status_index;
pub mod views;

pub use category::{CategoryKind, CategoryMapping, ErrorFacet};
pub use error::{Error, Result};
pub use issue::{Audience, CommitEntry, CommitTag, Issue, ReleaseInfo, ReportIssueEntry};
pub use model::{ReportInputs, ReportInputsBuilder, ReportModel, ReportSettings};
pub use status_index::InvalidStatusIndex;
pub use views::ReportViews;
