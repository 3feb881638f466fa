// src/bitmap/heatshrink.rs

//! Heatshrink (LZSS) decompression into a fixed-size buffer
//!
//! The stream is a big-endian bit sequence of tagged records:
//!
//! ```text
//! 1 <8 bits>                              literal byte
//! 0 <window_bits index> <lookahead_bits count>   back-reference
//! ```
//!
//! A back-reference copies `count + 1` bytes starting `index + 1` bytes
//! behind the write position. The window starts out zero-filled, so a
//! reference reaching before the first output byte yields zeros; encoders
//! emit exactly that for frames that open with blank rows. Trailing padding
//! bits that cannot form a whole record end the stream.
//!
//! Decoding never grows the output, so the worst-case memory cost is fixed
//! before the first bit is read.

use crate::error::{Error, Result};

/// Stream parameters (base-2 logarithms of window and lookahead sizes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub window_bits: u8,
    pub lookahead_bits: u8,
}

impl Params {
    /// Parameters used for device frame assets
    pub const FRAME: Params = Params {
        window_bits: 8,
        lookahead_bits: 4,
    };

    fn config(self) -> Result<heatshrink::Config> {
        heatshrink::Config::new(self.window_bits, self.lookahead_bits).map_err(|e| {
            Error::DecodeFailed(format!(
                "bad parameters {}/{}: {}",
                self.window_bits, self.lookahead_bits, e
            ))
        })
    }
}

/// Decompress `input` into `out`, which must be filled exactly
///
/// Fails if the stream produces more or fewer bytes than `out` holds.
pub fn decompress_into(input: &[u8], out: &mut [u8], params: Params) -> Result<()> {
    let config = params.config()?;

    // The decoder reports a full buffer as an error even when the stream ends
    // right there, so give it one spare byte and check the length ourselves
    let mut scratch = vec![0u8; out.len() + 1];
    let decoded = heatshrink::decode(input, &mut scratch, &config).map_err(|_| {
        Error::DecodeFailed(format!("stream overruns {}-byte frame", out.len()))
    })?;

    if decoded.len() != out.len() {
        return Err(Error::DecodeFailed(format!(
            "stream produced {} of {} bytes",
            decoded.len(),
            out.len()
        )));
    }

    out.copy_from_slice(decoded);
    Ok(())
}
