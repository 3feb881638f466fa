// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let Some(command) = cli.command else {
        // No command provided, show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        return commands::cmd_completions(shell);
    }

    let mut library = commands::open_library(&cli.config, cli.storage_root)?;

    match command {
        Commands::List { short } => commands::cmd_list(&library, short),
        Commands::Info { name } => commands::cmd_info(&library, &name),
        Commands::Preview { name } => commands::cmd_preview(&library, &name),
        Commands::Apply { name } => commands::cmd_apply(&mut library, &name),
        Commands::Restore => commands::cmd_restore(&mut library),
        Commands::Delete { name } => commands::cmd_delete(&mut library, &name),
        Commands::Completions { .. } => Ok(()),
    }
}
