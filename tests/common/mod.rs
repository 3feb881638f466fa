// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use themepack::LibraryConfig;
use themepack::manifest::MANIFEST_HEADER;

/// A storage volume laid out in a temporary directory.
///
/// Keep the value alive for the duration of the test to prevent cleanup.
pub struct Storage {
    temp_dir: TempDir,
}

impl Storage {
    /// Create an empty volume with an empty package root
    pub fn new() -> Self {
        let storage = Self::without_packages();
        fs::create_dir_all(storage.packages()).unwrap();
        storage
    }

    /// Create a volume with no package root at all
    pub fn without_packages() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn packages(&self) -> PathBuf {
        self.root().join("animation_packs")
    }

    pub fn active(&self) -> PathBuf {
        self.root().join("dolphin")
    }

    pub fn backup(&self) -> PathBuf {
        self.root().join("dolphin_backup")
    }

    pub fn config(&self) -> LibraryConfig {
        LibraryConfig::default().with_storage_root(self.root())
    }

    /// Write a file below the volume root, creating parents
    pub fn write(&self, rel: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// A `Pack` package whose manifest lists `anims`, each with a descriptor
    pub fn add_pack(&self, name: &str, anims: &[&str]) {
        let dir = format!("animation_packs/{}", name);
        self.write(format!("{}/manifest.txt", dir), manifest_text(anims));
        for anim in anims {
            self.write(format!("{}/{}/meta.txt", dir, anim), meta_text(8, 2));
            self.write(format!("{}/{}/frame_0.bm", dir, anim), raw_frame(&[0xFF, 0x00]));
        }
    }

    /// An `AnimsPack` package with its manifest and animations under `Anims/`
    pub fn add_anims_pack(&self, name: &str, anims: &[&str]) {
        let dir = format!("animation_packs/{}/Anims", name);
        self.write(format!("{}/manifest.txt", dir), manifest_text(anims));
        for anim in anims {
            self.write(format!("{}/{}/meta.txt", dir, anim), meta_text(8, 2));
            self.write(format!("{}/{}/frame_0.bm", dir, anim), raw_frame(&[0x0F, 0xF0]));
        }
    }

    /// A `Single` package: one descriptor and one frame
    pub fn add_single(&self, name: &str) {
        let dir = format!("animation_packs/{}", name);
        self.write(format!("{}/meta.txt", dir), meta_text(8, 1));
        self.write(format!("{}/frame_0.bm", dir), raw_frame(&[0x81]));
    }

    /// Seed the active configuration directory
    pub fn seed_active(&self, files: &[(&str, &str)]) {
        fs::create_dir_all(self.active()).unwrap();
        for (rel, content) in files {
            self.write(Path::new("dolphin").join(rel), content);
        }
    }
}

pub fn manifest_text(anims: &[&str]) -> String {
    let mut text = format!("{}\nVersion: 1\n", MANIFEST_HEADER);
    for anim in anims {
        text.push_str(&format!("\nName: {}\nMin butthurt: 0\nMax butthurt: 5\nWeight: 3\n", anim));
    }
    text
}

pub fn meta_text(width: u32, height: u32) -> String {
    format!(
        "Filetype: Flipper Animation\nVersion: 1\n\nWidth: {}\nHeight: {}\nPassive frames: 1\n",
        width, height
    )
}

pub fn raw_frame(pixels: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x00];
    frame.extend_from_slice(pixels);
    frame
}

/// Every file under `dir` with its contents, keyed by relative path
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(dir).unwrap().to_path_buf();
            (rel, fs::read(entry.path()).unwrap())
        })
        .collect()
}
