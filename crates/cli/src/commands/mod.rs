// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod build;
pub mod defects;

use std::path::Path;

use crate::config::{find_config, Config};
use crate::error::Result;

/// Helper to locate and load the configuration from the current context.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let path = find_config(explicit, &cwd)?;
    tracing::debug!(path = %path.display(), "loading configuration");
    Config::load(&path)
}
