//! The compression module ties the codecs to files.
//!
//! Codecs share one shape, [`Codec`], and are picked by name from [`CODECS`]. Adding a codec
//! means implementing the trait and listing it there. Nothing else dispatches on names.
//!
//! - compress: read each input file, encode it with the chosen codec and write
//!   `<name>_<codec>_compressed<.ext>`.
//! - decompress: recover the codec from such a file name, decode, and write
//!   `<name>_decompressed<.ext>`.
//!
//! Each file is handled start to finish in memory. The codecs never see a path.
//!

use crate::error::{Error, Result};
use crate::huffman_coding::codec::HuffmanCodec;
use crate::tools::rle1::RleCodec;

pub mod compress;
pub mod decompress;

/// A whole-buffer compressor.
pub trait Codec: Send + Sync {
    /// Name used to select the codec and to tag compressed file names.
    fn name(&self) -> &'static str;
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Every available codec. The first one is the default.
pub static CODECS: &[&dyn Codec] = &[&HuffmanCodec, &RleCodec];

/// Look a codec up by name, ignoring case.
pub fn codec_by_name(name: &str) -> Result<&'static dyn Codec> {
    CODECS
        .iter()
        .copied()
        .find(|codec| codec.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownCodec(name.to_string()))
}

/// Names of all available codecs.
pub fn codec_names() -> Vec<&'static str> {
    CODECS.iter().map(|codec| codec.name()).collect()
}
