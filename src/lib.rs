//! Byte-oriented Huffman compression.
//!
//! Provides lossless compression of arbitrary byte buffers with a static, per-buffer Huffman
//! tree. The compressed form is self describing: it carries the byte frequency table, from
//! which the decoder rebuilds the exact tree the encoder used.
//!
//! A simple run length codec is offered next to it. Both implement [`Codec`] and can be
//! selected by name with [`codec_by_name`].
//!
//! ```
//! let packed = hufzip::encode(b"abracadabra").unwrap();
//! assert_eq!(hufzip::decode(&packed).unwrap(), b"abracadabra");
//! ```
//!
//! The `hufzip` binary wraps this in a small file front end:
//!
//! `$> hufzip notes.txt`
//!
//! This writes notes_huffman_compressed.txt next to the input. `hufzip -d` reverses it.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::{codec_by_name, codec_names, Codec, CODECS};
pub use error::{Error, Result};
pub use huffman_coding::codec::{decode, encode, HuffmanCodec};
pub use tools::freq_count::FrequencyTable;
pub use tools::rle1::RleCodec;
