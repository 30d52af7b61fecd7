// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use rn_core::{Audience, ReportModel, ReportViews};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_report_summary;
use crate::error::Result;
use crate::snapshot::Snapshot;

use super::load_config;

const INTERNAL_SUFFIX: &str = "_INTERNAL";
const REPORT_EXTENSION: &str = "json";

/// A report model as written to disk.
#[derive(Serialize)]
struct ReportFile<'a> {
    generator: String,
    generated_at: DateTime<Utc>,
    model: &'a ReportModel,
}

/// A report written by one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenReport {
    pub audience: Audience,
    pub path: PathBuf,
    #[serde(skip)]
    pub summary: String,
}

pub fn run(
    snapshot: &Path,
    config: Option<&Path>,
    out: Option<PathBuf>,
    output: OutputFormat,
) -> Result<()> {
    let config = load_config(config)?;
    let out_dir = out.unwrap_or_else(|| config.report_directory());
    let written = run_impl(snapshot, &config, &out_dir)?;

    match output {
        OutputFormat::Text => {
            for (i, report) in written.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", report.summary);
                println!("Wrote {}", report.path.display());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&written)?);
        }
    }
    Ok(())
}

/// Internal implementation that accepts a loaded config for testing.
pub(crate) fn run_impl(
    snapshot_path: &Path,
    config: &Config,
    out_dir: &Path,
) -> Result<Vec<WrittenReport>> {
    let inputs = Snapshot::load(snapshot_path)?.into_inputs(config)?;
    let views = ReportViews::build(inputs, config.client_facing)?;

    fs::create_dir_all(out_dir)?;
    let generated_at = Utc::now();
    views
        .iter()
        .map(|model| write_report(model, out_dir, generated_at))
        .collect()
}

fn write_report(
    model: &ReportModel,
    out_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<WrittenReport> {
    let path = out_dir.join(report_file_name(&model.release().version, model.audience()));
    let report = ReportFile {
        generator: format!("relnotes {}", env!("CARGO_PKG_VERSION")),
        generated_at,
        model,
    };

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(audience = %model.audience(), path = %path.display(), "wrote report");
    Ok(WrittenReport {
        audience: model.audience(),
        path,
        summary: format_report_summary(model),
    })
}

/// File name of a report: dots in the version become underscores, and the
/// internal report carries an `_INTERNAL` suffix.
pub fn report_file_name(version: &str, audience: Audience) -> String {
    let stem = version.replace('.', "_");
    match audience {
        Audience::Internal => format!("{stem}{INTERNAL_SUFFIX}.{REPORT_EXTENSION}"),
        Audience::External => format!("{stem}.{REPORT_EXTENSION}"),
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
