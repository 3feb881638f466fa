// src/commands/list.rs

//! List command - show the packages found by a scan

use anyhow::Result;
use themepack::ThemeLibrary;
use themepack::format::menu_label;

/// List theme packages
pub fn cmd_list(library: &ThemeLibrary, short: bool) -> Result<()> {
    let scan = library.scan();

    if let Some(message) = scan.empty_message() {
        println!("{}", message);
    } else if short {
        for package in &scan.packages {
            println!("{}", menu_label(package.variant(), package.name()));
        }
    } else {
        println!("Theme packages in {}:", library.config().packages_path().display());
        for package in &scan.packages {
            println!("  {:<10} {}", package.variant().label(), package.name());
        }
        println!("\nTotal: {} package(s)", scan.len());
        if scan.limit_reached {
            println!("(listing stopped at the package limit)");
        }
    }

    if scan.backup_exists {
        println!(">> Restore Previous <<");
    }

    Ok(())
}
