// src/format.rs

//! Display helpers shared by listings and package details

use crate::package::PackageVariant;

/// Longest menu label, prefix included
pub const MENU_LABEL_MAX: usize = 31;

/// Labels longer than this are shortened with an ellipsis
const MENU_LABEL_SHORTEN_ABOVE: usize = 26;
const MENU_LABEL_KEEP: usize = 23;

/// Format a byte count for display
///
/// Megabytes show one decimal, truncated rather than rounded, so a size never
/// reads larger than it is.
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if size >= MB {
        let whole = size / MB;
        let tenth = (size % MB) * 10 / MB;
        format!("{}.{} MB", whole, tenth)
    } else if size >= KB {
        format!("{} KB", size / KB)
    } else {
        format!("{} B", size)
    }
}

/// Compact one-line label for a package in a listing
pub fn menu_label(variant: PackageVariant, name: &str) -> String {
    let label: String = format!("{}{}", variant.menu_prefix(), name)
        .chars()
        .take(MENU_LABEL_MAX)
        .collect();

    if label.chars().count() > MENU_LABEL_SHORTEN_ABOVE {
        let kept: String = label.chars().take(MENU_LABEL_KEEP).collect();
        format!("{}...", kept)
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1023 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        // 1.99 MB truncates to 1.9
        assert_eq!(format_size(2 * 1024 * 1024 - 1), "1.9 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }

    #[test]
    fn test_short_menu_label_unchanged() {
        assert_eq!(menu_label(PackageVariant::Pack, "Ocean"), "[P] Ocean");
        // Exactly 26 characters is kept whole
        let name = "x".repeat(22);
        assert_eq!(menu_label(PackageVariant::Single, &name), format!("[S] {}", name));
    }

    #[test]
    fn test_long_menu_label_shortened() {
        let name = "x".repeat(23);
        let label = menu_label(PackageVariant::AnimsPack, &name);
        assert_eq!(label, format!("[A] {}...", "x".repeat(19)));
        assert_eq!(label.chars().count(), 26);

        let label = menu_label(PackageVariant::Pack, &"y".repeat(60));
        assert_eq!(label.chars().count(), 26);
        assert!(label.ends_with("..."));
    }
}
