// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rnrs - Release notes report builder library.
//!
//! This crate provides the functionality behind the `relnotes` CLI: it loads
//! a collected snapshot and a TOML configuration, builds the report models
//! with [`rn_core`], and writes them as JSON for a renderer.
//!
//! # Main Components
//!
//! - [`Config`] - Report configuration (tracker URL, known issues, audiences)
//! - [`Snapshot`] - Collected issues, commits and release metadata
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use rnrs::{Config, Snapshot};
//! use rn_core::ReportViews;
//!
//! let config = Config::load(Path::new("relnotes.toml"))?;
//! let inputs = Snapshot::load(Path::new("snapshot.json"))?.into_inputs(&config)?;
//! let views = ReportViews::build(inputs, config.client_facing)?;
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod error;
pub mod snapshot;

pub use cli::{Cli, Command, ConfigArgs, OutputFormat};
pub use config::{find_config, Config};
pub use error::{Error, Result};
pub use snapshot::Snapshot;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Build {
            snapshot,
            config,
            out,
            output,
        } => commands::build::run(&snapshot, config.config.as_deref(), out, output),
        Command::Defects { texts } => commands::defects::run(&texts),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "relnotes", &mut std::io::stdout());
            Ok(())
        }
    }
}
