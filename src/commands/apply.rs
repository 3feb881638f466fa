// src/commands/apply.rs

//! Commands that change the active configuration or the package root

use anyhow::{Context, Result};
use themepack::ThemeLibrary;
use tracing::info;

/// Apply a package
pub fn cmd_apply(library: &mut ThemeLibrary, name: &str) -> Result<()> {
    info!("Applying package: {}", name);

    let report = library
        .apply(name)
        .with_context(|| format!("Failed to apply {}", name))?;

    println!("{}: {}", report.package, report.summary());
    println!(
        "  {} file(s) added, {} replaced",
        report.merge.files_added, report.merge.files_replaced
    );
    if report.backup_taken {
        println!("  Previous configuration saved; use 'themepack restore' to go back");
    }
    println!("Reboot the device to load the new animations.");

    Ok(())
}

/// Restore the previous configuration
pub fn cmd_restore(library: &mut ThemeLibrary) -> Result<()> {
    if !library.backup_exists() {
        return Err(anyhow::anyhow!("No backup to restore"));
    }

    library.restore().context("Failed to restore backup")?;
    println!("Previous configuration restored.");
    println!("Reboot the device to load the restored animations.");

    Ok(())
}

/// Delete a package
pub fn cmd_delete(library: &mut ThemeLibrary, name: &str) -> Result<()> {
    info!("Deleting package: {}", name);

    library
        .delete(name)
        .with_context(|| format!("Failed to delete {}", name))?;
    println!("Deleted {}", name);

    Ok(())
}
