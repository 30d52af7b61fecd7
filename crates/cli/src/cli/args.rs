// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;
use std::path::PathBuf;

/// Configuration file selection.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Configuration file (default: ./relnotes.toml, then the user config dir)
    #[arg(long, short, value_name = "path")]
    pub config: Option<PathBuf>,
}
