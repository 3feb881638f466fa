// src/library.rs

//! The theme library: one scan of the package root plus the operations on it
//!
//! Every mutating operation rescans afterwards, so the package list and the
//! backup flag always describe the disk as it is now. The operation's own
//! result is what the caller gets back; a failed rescan is only logged.

use crate::apply::{ApplyEngine, ApplyReport};
use crate::bitmap::DecodedBitmap;
use crate::config::LibraryConfig;
use crate::error::{Error, Result};
use crate::package::{PackageInfo, PackageScanner, ScanResult, ThemePackage};
use crate::preview::PreviewLoader;
use tracing::{debug, warn};

/// Scanned package list together with the engine that changes it
#[derive(Debug)]
pub struct ThemeLibrary {
    config: LibraryConfig,
    scanner: PackageScanner,
    engine: ApplyEngine,
    previews: PreviewLoader,
    scan: ScanResult,
}

impl ThemeLibrary {
    /// Open the library described by `config` and run the first scan
    pub fn open(config: LibraryConfig) -> Result<Self> {
        let packages = config.packages_path();
        let scanner = PackageScanner::new(&packages, config.backup_path());
        let scan = scanner.scan()?;

        Ok(Self {
            engine: ApplyEngine::from_config(&config),
            previews: PreviewLoader::new(&packages),
            scanner,
            scan,
            config,
        })
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Result of the most recent scan
    pub fn scan(&self) -> &ScanResult {
        &self.scan
    }

    pub fn packages(&self) -> &[ThemePackage] {
        &self.scan.packages
    }

    pub fn backup_exists(&self) -> bool {
        self.engine.backup_exists()
    }

    /// Scan the package root again
    pub fn rescan(&mut self) -> Result<&ScanResult> {
        self.engine.refresh();
        self.scan = self.scanner.scan()?;
        debug!("Rescanned: {} packages", self.scan.len());
        Ok(&self.scan)
    }

    /// Look up a package from the latest scan
    pub fn find(&self, name: &str) -> Result<&ThemePackage> {
        self.scan
            .find(name)
            .ok_or_else(|| Error::NotFound(self.scanner.root().join(name)))
    }

    /// Display details for `name`
    pub fn info(&self, name: &str) -> Result<PackageInfo> {
        PackageInfo::inspect(self.scanner.root(), self.find(name)?)
    }

    /// Decoded first frame of `name`
    pub fn preview(&self, name: &str) -> Result<DecodedBitmap> {
        self.previews.try_load(self.find(name)?)
    }

    /// Apply `name` to the active configuration, then rescan
    pub fn apply(&mut self, name: &str) -> Result<ApplyReport> {
        let package = self.find(name)?.clone();
        let outcome = self.engine.apply(&package);
        self.settle("apply", outcome)
    }

    /// Restore the backup over the active configuration, then rescan
    pub fn restore(&mut self) -> Result<()> {
        let outcome = self.engine.restore();
        self.settle("restore", outcome)
    }

    /// Delete `name` from the package root, then rescan
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let package = self.find(name)?.clone();
        let outcome = self.engine.delete(&package);
        self.settle("delete", outcome)
    }

    fn settle<T>(&mut self, op: &str, outcome: Result<T>) -> Result<T> {
        let rescanned = self.rescan().map(|_| ());
        keep_outcome(op, outcome, rescanned)
    }
}

/// The mutation already happened on disk; its result wins over the rescan's
fn keep_outcome<T>(op: &str, outcome: Result<T>, rescanned: Result<()>) -> Result<T> {
    if let Err(e) = rescanned {
        warn!("Rescan after {} failed: {}", op, e);
    }
    outcome
}
