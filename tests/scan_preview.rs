// tests/scan_preview.rs

//! Package discovery, info, and preview tests.

mod common;

use common::{Storage, manifest_text, meta_text, raw_frame};
use themepack::package::{PackageScanner, RootState};
use themepack::{Error, PackageVariant, ThemeLibrary};

#[test]
fn test_missing_package_root() {
    let storage = Storage::without_packages();
    let library = ThemeLibrary::open(storage.config()).unwrap();

    let scan = library.scan();
    assert!(scan.is_empty());
    assert_eq!(scan.root, RootState::Missing);
    assert_eq!(scan.empty_message(), Some("[No SD / No folder]"));
}

#[test]
fn test_classifies_all_layouts() {
    let storage = Storage::new();
    storage.add_pack("Ocean", &["Wave"]);
    storage.add_anims_pack("Forest", &["Leaf"]);
    storage.add_single("Solo");
    storage.write("animation_packs/Junk/readme.txt", "not a theme");
    storage.write("animation_packs/loose_file.txt", "not a dir");

    let library = ThemeLibrary::open(storage.config()).unwrap();
    let mut found: Vec<_> = library
        .packages()
        .iter()
        .map(|p| (p.name().to_string(), p.variant()))
        .collect();
    found.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        found,
        vec![
            ("Forest".to_string(), PackageVariant::AnimsPack),
            ("Ocean".to_string(), PackageVariant::Pack),
            ("Solo".to_string(), PackageVariant::Single),
        ]
    );
}

#[test]
fn test_top_level_manifest_takes_precedence() {
    let storage = Storage::new();
    storage.add_anims_pack("Both", &["Inner"]);
    storage.write("animation_packs/Both/manifest.txt", manifest_text(&["Outer"]));
    storage.write("animation_packs/Both/meta.txt", meta_text(8, 1));

    let variant = PackageScanner::classify(&storage.packages().join("Both"));
    assert_eq!(variant, Some(PackageVariant::Pack));
}

#[test]
fn test_scan_reports_backup() {
    let storage = Storage::new();
    let library = ThemeLibrary::open(storage.config()).unwrap();
    assert!(!library.scan().backup_exists);
    assert_eq!(library.scan().empty_message(), Some("[No themes found]"));

    std::fs::create_dir_all(storage.backup()).unwrap();
    let library = ThemeLibrary::open(storage.config()).unwrap();
    assert!(library.scan().backup_exists);
    assert!(library.backup_exists());
}

#[test]
fn test_info_for_each_variant() {
    let storage = Storage::new();
    storage.add_pack("Ocean", &["Wave", "Tide", "Reef"]);
    storage.add_anims_pack("Forest", &["Leaf", "Owl"]);
    storage.add_single("Solo");

    let library = ThemeLibrary::open(storage.config()).unwrap();

    let ocean = library.info("Ocean").unwrap();
    assert_eq!(ocean.type_label, "Pack");
    assert_eq!(ocean.animation_count, 3);
    assert!(ocean.size_bytes > 0);
    assert!(ocean.size_display().ends_with(" B"));

    let forest = library.info("Forest").unwrap();
    assert_eq!(forest.type_label, "Anim Pack");
    assert_eq!(forest.animation_count, 2);

    let solo = library.info("Solo").unwrap();
    assert_eq!(solo.type_label, "Single");
    assert_eq!(solo.animation_count, 1);
    assert!(solo.preview.is_some());
}

#[test]
fn test_preview_follows_variant_paths() {
    let storage = Storage::new();
    storage.add_pack("Ocean", &["Wave"]);
    storage.add_anims_pack("Forest", &["Leaf"]);
    storage.add_single("Solo");

    let library = ThemeLibrary::open(storage.config()).unwrap();

    let ocean = library.preview("Ocean").unwrap();
    assert_eq!((ocean.width(), ocean.height()), (8, 2));
    assert_eq!(ocean.data(), &[0xFF, 0x00]);

    let forest = library.preview("Forest").unwrap();
    assert_eq!(forest.data(), &[0x0F, 0xF0]);

    let solo = library.preview("Solo").unwrap();
    assert_eq!((solo.width(), solo.height()), (8, 1));
    assert!(solo.pixel(0, 0) && solo.pixel(7, 0));
}

#[test]
fn test_preview_rejects_bad_inputs() {
    let storage = Storage::new();
    storage.write("animation_packs/Wide/meta.txt", "Width: 200\nHeight: 10\n");
    storage.write("animation_packs/Wide/frame_0.bm", raw_frame(&[0; 4]));
    storage.write("animation_packs/Tiny/meta.txt", meta_text(8, 1));
    storage.write("animation_packs/Tiny/frame_0.bm", [0x00u8]);
    storage.write("animation_packs/Huge/meta.txt", meta_text(8, 1));
    storage.write("animation_packs/Huge/frame_0.bm", vec![0u8; 2049]);

    let library = ThemeLibrary::open(storage.config()).unwrap();

    assert!(matches!(
        library.preview("Wide"),
        Err(Error::SizeOutOfBounds { what: "width", value: 200, .. })
    ));
    assert!(matches!(
        library.preview("Tiny"),
        Err(Error::SizeOutOfBounds { value: 1, .. })
    ));
    assert!(matches!(
        library.preview("Huge"),
        Err(Error::SizeOutOfBounds { value: 2049, .. })
    ));

    // Info degrades to no preview instead of failing
    assert!(library.info("Wide").unwrap().preview.is_none());
}
