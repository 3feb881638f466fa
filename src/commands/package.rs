// src/commands/package.rs

//! Package inspection commands
//!
//! Functions for showing package details and rendering previews.

use anyhow::Result;
use themepack::ThemeLibrary;
use themepack::bitmap::DecodedBitmap;

/// Show detailed package information
pub fn cmd_info(library: &ThemeLibrary, name: &str) -> Result<()> {
    let info = library.info(name)?;

    println!("Name        : {}", info.name);
    println!("Type        : {}", info.type_label);
    println!("Animations  : {}", info.animation_count);
    println!("Size        : {}", info.size_display());
    match &info.preview {
        Some(bitmap) => println!("Preview     : {}x{}", bitmap.width(), bitmap.height()),
        None => println!("Preview     : (none)"),
    }

    Ok(())
}

/// Render the first frame of a package
pub fn cmd_preview(library: &ThemeLibrary, name: &str) -> Result<()> {
    let bitmap = library.preview(name)?;
    print!("{}", render_bitmap(&bitmap));
    Ok(())
}

/// One text line per pixel row, `#` for set pixels
fn render_bitmap(bitmap: &DecodedBitmap) -> String {
    let mut out = String::with_capacity((bitmap.width() as usize + 1) * bitmap.height() as usize);
    for row in bitmap.rows() {
        out.extend(row.into_iter().map(|set| if set { '#' } else { '.' }));
        out.push('\n');
    }
    out
}
