// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: package name
fn name_arg() -> Arg {
    Arg::new("name").required(true).help("Package name")
}

fn build_cli() -> Command {
    Command::new("themepack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage swappable animation theme packages")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .default_value("/etc/themepack/config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("storage_root")
                .short('r')
                .long("storage-root")
                .value_name("PATH")
                .help("Storage volume root (overrides the configuration file)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log at debug level unless RUST_LOG says otherwise"),
        )
        .subcommand(
            Command::new("list")
                .about("List theme packages in the package root")
                .arg(
                    Arg::new("short")
                        .long("short")
                        .action(ArgAction::SetTrue)
                        .help("Show compact menu labels instead of the full table"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show details for a package")
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Render the first frame of a package as text")
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply a package to the active configuration")
                .arg(name_arg()),
        )
        .subcommand(Command::new("restore").about("Restore the configuration saved by the last apply"))
        .subcommand(
            Command::new("delete")
                .about("Delete a package from the package root")
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("themepack.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
