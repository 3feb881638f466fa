// src/bitmap/mod.rs

//! Frame bitmap decoding for previews
//!
//! Animation frames (`frame_N.bm`) are packed 1-bit-per-pixel bitmaps, rows
//! top to bottom, least significant bit leftmost, each row padded to a whole
//! byte. On disk they are wrapped in a small container:
//!
//! ```text
//! 0x00 <raw packed bitmap>
//! 0x01 <reserved u8> <compressed length u16 LE> <heatshrink stream>
//! ```
//!
//! Input size is bounded before any decoding is attempted so a corrupt or
//! hostile file can never cost more than a 2 KiB read and a 1 KiB buffer.

pub mod heatshrink;

use crate::error::{Error, Result};
use crate::manifest::meta::{Dimensions, MAX_HEIGHT, MAX_WIDTH};

/// Smallest frame file accepted for decoding
pub const MIN_FRAME_LEN: usize = 2;
/// Largest frame file accepted for decoding
pub const MAX_FRAME_LEN: usize = 2048;

const ENCODING_RAW: u8 = 0x00;
const ENCODING_HEATSHRINK: u8 = 0x01;
const HEATSHRINK_HEADER_LEN: usize = 4;

/// Reject a frame length outside `[MIN_FRAME_LEN, MAX_FRAME_LEN]`
pub fn check_frame_len(len: u64) -> Result<()> {
    if len < MIN_FRAME_LEN as u64 || len > MAX_FRAME_LEN as u64 {
        return Err(Error::SizeOutOfBounds {
            what: "frame length",
            value: len,
            min: MIN_FRAME_LEN as u64,
            max: MAX_FRAME_LEN as u64,
        });
    }
    Ok(())
}

/// A fully decoded 1-bpp frame
///
/// The buffer length always equals `stride * height`; a bitmap is only ever
/// constructed from a completely filled buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DecodedBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Packed row-major pixel data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the pixel at (x, y) is set; out-of-range coordinates are unset
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.stride() + (x / 8) as usize];
        byte & (1 << (x % 8)) != 0
    }

    /// Iterate rows as slices of pixel flags
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.height).map(move |y| (0..self.width).map(|x| self.pixel(x, y)).collect())
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<Dimensions> {
    for (what, value, max) in [("width", width, MAX_WIDTH), ("height", height, MAX_HEIGHT)] {
        if value == 0 || value > max {
            return Err(Error::SizeOutOfBounds {
                what,
                value: u64::from(value),
                min: 1,
                max: u64::from(max),
            });
        }
    }
    Ok(Dimensions { width, height })
}

/// Decode a frame file's bytes into a `width` x `height` bitmap
pub fn decode_frame(bytes: &[u8], width: u32, height: u32) -> Result<DecodedBitmap> {
    check_frame_len(bytes.len() as u64)?;
    let dims = validate_dimensions(width, height)?;

    let mut buffer = vec![0u8; dims.frame_len()];

    match bytes[0] {
        ENCODING_RAW => {
            let payload = &bytes[1..];
            if payload.len() != buffer.len() {
                return Err(Error::DecodeFailed(format!(
                    "raw frame has {} bytes, expected {}",
                    payload.len(),
                    buffer.len()
                )));
            }
            buffer.copy_from_slice(payload);
        }
        ENCODING_HEATSHRINK => {
            if bytes.len() < HEATSHRINK_HEADER_LEN {
                return Err(Error::DecodeFailed("truncated frame header".to_string()));
            }
            let declared = usize::from(u16::from_le_bytes([bytes[2], bytes[3]]));
            let payload = &bytes[HEATSHRINK_HEADER_LEN..];
            if declared > payload.len() {
                return Err(Error::DecodeFailed(format!(
                    "frame declares {} compressed bytes, only {} present",
                    declared,
                    payload.len()
                )));
            }
            heatshrink::decompress_into(&payload[..declared], &mut buffer, heatshrink::Params::FRAME)?;
        }
        other => {
            return Err(Error::DecodeFailed(format!(
                "unknown frame encoding 0x{:02x}",
                other
            )));
        }
    }

    Ok(DecodedBitmap {
        width,
        height,
        data: buffer,
    })
}
