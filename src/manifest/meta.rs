// src/manifest/meta.rs

//! Animation descriptor (`meta.txt`) parsing
//!
//! Only the frame dimensions are needed to decode a preview, so only the
//! `Width:` and `Height:` fields are read.

use super::read_text;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Largest frame width the display can show
pub const MAX_WIDTH: u32 = 128;
/// Largest frame height the display can show
pub const MAX_HEIGHT: u32 = 64;

/// Frame dimensions of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Bytes per packed 1-bpp row
    pub fn stride(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Bytes in a packed 1-bpp frame
    pub fn frame_len(&self) -> usize {
        self.stride() * self.height as usize
    }
}

/// Parse the integer following the first occurrence of `token`
///
/// Leading spaces and tabs are skipped; the number ends at the first
/// non-digit. No digits at all is a failure.
fn field_value(content: &str, token: &'static str) -> Result<u64> {
    let start = content
        .find(token)
        .ok_or_else(|| Error::InvalidDescriptor(format!("no {} field", token)))?;
    let rest = content[start + token.len()..].trim_start_matches([' ', '\t']);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() {
        return Err(Error::InvalidDescriptor(format!(
            "{} field is not numeric",
            token
        )));
    }

    // Saturate absurdly long digit runs; they fail the range check anyway
    Ok(digits.parse::<u64>().unwrap_or(u64::MAX))
}

fn bounded(value: u64, what: &'static str, max: u32) -> Result<u32> {
    if value == 0 || value > u64::from(max) {
        return Err(Error::SizeOutOfBounds {
            what,
            value,
            min: 1,
            max: u64::from(max),
        });
    }
    Ok(value as u32)
}

/// Parse dimensions from descriptor text
pub fn parse_dimensions_str(content: &str) -> Result<Dimensions> {
    let width = bounded(field_value(content, "Width:")?, "width", MAX_WIDTH)?;
    let height = bounded(field_value(content, "Height:")?, "height", MAX_HEIGHT)?;
    Ok(Dimensions { width, height })
}

/// Read a descriptor file and extract its dimensions
///
/// Both fields must be present, numeric and in range; there is no partial
/// result.
pub fn parse_dimensions(path: &Path) -> Result<Dimensions> {
    let content = read_text(path)?;
    let dims = parse_dimensions_str(&content)?;
    debug!("{}: {}x{}", path.display(), dims.width, dims.height);
    Ok(dims)
}
