// tests/apply_workflow.rs

//! Apply, restore, and delete workflow tests.

mod common;

use common::{Storage, snapshot};
use std::fs;
use themepack::manifest::ManifestSummary;
use themepack::{ApplyEngine, Error, PackageVariant, ThemeLibrary, ThemePackage};

#[test]
fn test_single_apply_synthesizes_one_entry_manifest() {
    let storage = Storage::new();
    storage.add_single("Foo");

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    let report = library.apply("Foo").unwrap();
    assert_eq!(report.variant, PackageVariant::Single);
    assert_eq!(report.summary(), "Anim + manifest");

    let manifest = storage.active().join("manifest.txt");
    assert_eq!(ManifestSummary::check(&manifest), (true, 1));
    let summary = ManifestSummary::from_file(&manifest).unwrap();
    assert_eq!(summary.first_entry.as_deref(), Some("Foo"));

    assert!(storage.active().join("Foo/meta.txt").is_file());
    assert!(storage.active().join("Foo/frame_0.bm").is_file());
}

#[test]
fn test_apply_then_restore_reproduces_active() {
    let storage = Storage::new();
    storage.seed_active(&[
        ("manifest.txt", "Filetype: Flipper Animation Manifest\nName: Old\n"),
        ("Old/meta.txt", "Width: 8\nHeight: 8\n"),
        ("Old/frame_0.bm", "old frame"),
    ]);
    storage.add_pack("Ocean", &["Wave", "Tide"]);
    let before = snapshot(&storage.active());

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    let report = library.apply("Ocean").unwrap();
    assert!(report.backup_taken);
    assert!(library.backup_exists());
    assert_ne!(snapshot(&storage.active()), before);
    assert_eq!(snapshot(&storage.backup()), before);

    library.restore().unwrap();
    assert_eq!(snapshot(&storage.active()), before);
    assert!(!storage.backup().exists());
    assert!(!library.backup_exists());
}

#[test]
fn test_restore_without_backup_changes_nothing() {
    let storage = Storage::new();
    storage.seed_active(&[("keep.txt", "keep")]);
    let before = snapshot(&storage.active());

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    let err = library.restore().unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(snapshot(&storage.active()), before);
}

#[test]
fn test_second_apply_keeps_only_latest_backup() {
    let storage = Storage::new();
    storage.seed_active(&[("original.txt", "original")]);
    storage.add_pack("A", &["AnimA"]);
    storage.add_anims_pack("B", &["AnimB"]);

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    library.apply("A").unwrap();
    let after_a = snapshot(&storage.active());

    library.apply("B").unwrap();
    assert_eq!(snapshot(&storage.backup()), after_a);

    library.restore().unwrap();
    assert_eq!(snapshot(&storage.active()), after_a);
    assert!(!storage.active().join("original.txt").exists());

    // Only one backup slot: the pre-A state is gone
    assert!(library.restore().is_err());
}

#[test]
fn test_pack_merge_contents() {
    let storage = Storage::new();
    storage.add_pack("Ocean", &["Wave"]);
    storage.write("animation_packs/Ocean/extra/notes.txt", "notes");

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    let report = library.apply("Ocean").unwrap();
    assert!(!report.backup_taken);
    assert_eq!(report.summary(), "Pack merged");

    let active = snapshot(&storage.active());
    let source = snapshot(&storage.packages().join("Ocean"));
    assert_eq!(active, source);
}

#[test]
fn test_anims_pack_merges_only_anims_directory() {
    let storage = Storage::new();
    storage.add_anims_pack("Forest", &["Leaf", "Owl"]);
    storage.write("animation_packs/Forest/README.md", "readme");

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    assert_eq!(library.apply("Forest").unwrap().summary(), "Anims merged");

    assert_eq!(
        ManifestSummary::check(&storage.active().join("manifest.txt")),
        (true, 2)
    );
    assert!(storage.active().join("Owl/frame_0.bm").is_file());
    assert!(!storage.active().join("README.md").exists());
}

#[test]
fn test_apply_without_active_takes_no_backup() {
    let storage = Storage::new();
    storage.add_single("Solo");

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    let report = library.apply("Solo").unwrap();
    assert!(!report.backup_taken);
    assert!(!library.backup_exists());
    assert!(storage.active().is_dir());
}

#[test]
fn test_delete_removes_source_only() {
    let storage = Storage::new();
    storage.seed_active(&[("keep.txt", "keep")]);
    storage.add_single("Solo");
    storage.add_pack("Ocean", &["Wave"]);

    let mut library = ThemeLibrary::open(storage.config()).unwrap();
    library.apply("Ocean").unwrap();
    let active = snapshot(&storage.active());

    library.delete("Ocean").unwrap();
    assert!(!storage.packages().join("Ocean").exists());
    assert_eq!(library.packages().len(), 1);
    assert!(library.backup_exists());
    assert_eq!(snapshot(&storage.active()), active);
}

#[test]
fn test_engine_rejects_traversal_names() {
    let storage = Storage::new();
    storage.seed_active(&[("keep.txt", "keep")]);

    let mut engine = ApplyEngine::from_config(&storage.config());
    let package = ThemePackage::new("../dolphin", PackageVariant::Pack);
    assert!(engine.apply(&package).is_err());
    assert!(engine.delete(&package).is_err());
    assert!(storage.active().join("keep.txt").is_file());
}

#[test]
fn test_single_defaults_from_config() {
    let storage = Storage::new();
    storage.add_single("Foo");
    let mut config = storage.config();
    config.single_defaults.weight = 9;

    let mut library = ThemeLibrary::open(config).unwrap();
    library.apply("Foo").unwrap();

    let text = fs::read_to_string(storage.active().join("manifest.txt")).unwrap();
    assert!(text.contains("\nWeight: 9\n"));
    assert!(text.contains("\nMax level: 30\n"));
}
