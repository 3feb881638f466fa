// src/cli/mod.rs
//! CLI definitions for themepack
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! - `list` - List theme packages
//! - `info` / `preview` - Inspect one package
//! - `apply` / `restore` - Swap the active configuration
//! - `delete` - Remove a package from the package root

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use themepack::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "themepack")]
#[command(version)]
#[command(about = "Manage swappable animation theme packages", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Storage volume root (overrides the configuration file)
    #[arg(short = 'r', long, global = true)]
    pub storage_root: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List theme packages in the package root
    List {
        /// Show compact menu labels instead of the full table
        #[arg(long)]
        short: bool,
    },

    /// Show details for a package
    Info {
        /// Package name
        name: String,
    },

    /// Render the first frame of a package as text
    Preview {
        /// Package name
        name: String,
    },

    /// Apply a package to the active configuration
    Apply {
        /// Package name
        name: String,
    },

    /// Restore the configuration saved by the last apply
    Restore,

    /// Delete a package from the package root
    Delete {
        /// Package name
        name: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
