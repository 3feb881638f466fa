// src/commands/mod.rs
//! Command handlers for the themepack CLI

mod apply;
mod list;
mod package;

pub use apply::{cmd_apply, cmd_delete, cmd_restore};
pub use list::cmd_list;
pub use package::{cmd_info, cmd_preview};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use themepack::{LibraryConfig, ThemeLibrary};
use tracing::debug;

use crate::cli::Cli;

/// Load the configuration and open the library it describes
pub fn open_library(config_path: &Path, storage_root: Option<PathBuf>) -> Result<ThemeLibrary> {
    let mut config = LibraryConfig::load(config_path)
        .with_context(|| format!("Failed to load configuration {}", config_path.display()))?;

    if let Some(root) = storage_root {
        config = config.with_storage_root(root);
    }
    debug!(
        "Packages: {}, active: {}, backup: {}",
        config.packages_path().display(),
        config.active_path().display(),
        config.backup_path().display()
    );

    let library = ThemeLibrary::open(config)?;
    Ok(library)
}

/// Print shell completions to stdout
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
