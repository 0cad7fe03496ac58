//! Simple run length codec, offered as an alternative to the Huffman coder.
//!
//! Every run of identical bytes becomes a `(count, byte)` pair. Counts are 1-255, so longer
//! runs are split over several pairs.

use log::debug;

use crate::compression::Codec;
use crate::error::{Error, Result};

const MAX_RUN: usize = 255;

/// Encode runs of identical bytes as (count, byte) pairs.
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(data.len() / 2 + 2);
    let mut start = 0;
    while start < data.len() {
        let byte = data[start];
        // Length of this run, capped at MAX_RUN
        let run = data[start..]
            .iter()
            .take(MAX_RUN)
            .position(|&x| x != byte)
            .unwrap_or_else(|| (data.len() - start).min(MAX_RUN));
        out.push(run as u8);
        out.push(byte);
        start += run;
    }
    debug!("RLE encoded {} bytes into {} bytes.", data.len(), out.len());
    out
}

/// Expand (count, byte) pairs. A count of zero expands to nothing.
pub fn rle_decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % 2 != 0 {
        return Err(Error::MalformedRle(data.len() - 1));
    }
    let mut out = Vec::with_capacity(data.len() * 4);
    for pair in data.chunks_exact(2) {
        out.extend(std::iter::repeat(pair[1]).take(pair[0] as usize));
    }
    debug!("RLE decoded {} bytes into {} bytes.", data.len(), out.len());
    Ok(out)
}

/// The run length coder as a selectable [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RleCodec;

impl Codec for RleCodec {
    fn name(&self) -> &'static str {
        "rle"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(rle_encode(data))
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        rle_decode(data)
    }
}
