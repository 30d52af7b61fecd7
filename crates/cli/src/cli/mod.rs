// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::ConfigArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build release notes report models from collected tracker and commit data")]
#[command(
    long_about = "Build release notes report models from collected tracker and commit data.\n\n\
    Reads a JSON snapshot of categorized issues, commits and release metadata, \
    and writes one report model per audience for a renderer to consume."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build report models from a snapshot
    #[command(after_help = "\
Examples:
  relnotes build snapshot.json                  Build with ./relnotes.toml
  relnotes build snapshot.json -c ci.toml       Build with an explicit config
  relnotes build snapshot.json --out reports    Write into ./reports
  relnotes build snapshot.json -o json          Print written paths as JSON")]
    Build {
        /// Snapshot file (JSON)
        snapshot: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output directory (overrides report_directory)
        #[arg(long, value_name = "dir")]
        out: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Extract normalized defect ids from text
    #[command(after_help = "\
Examples:
  relnotes defects \"defect_12, Defect_3\"     Prints Defect_12 and Defect_3
  git log --format=%b | relnotes defects      Read text from stdin")]
    Defects {
        /// Text to scan; read from stdin when omitted
        texts: Vec<String>,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  relnotes completion bash > ~/.local/share/bash-completion/completions/relnotes
  relnotes completion zsh > ~/.zfunc/_relnotes
  relnotes completion fish > ~/.config/fish/completions/relnotes.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
