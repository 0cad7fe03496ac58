//! Huffman encode and decode of whole buffers.
//!
//! Encoding counts the bytes, builds the tree and code book, and writes the container
//! (see [`header`](super::header)). Decoding reads the frequency table back, rebuilds the
//! very same tree and walks it one bit at a time.
//!
//! Both directions are pure functions of their input. Nothing is kept between calls.
//!

use log::{debug, trace};

use super::code_book::CodeBook;
use super::header::{read_header, write_header};
use super::huffman::{HuffmanTree, NodeData};
use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::compression::Codec;
use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyTable;

/// Encode `data` into a Huffman container. Empty input gives empty output.
///
/// Fails only with `InputTooLarge` when a single byte value occurs more than `u32::MAX`
/// times.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    let table = FrequencyTable::from_bytes(data);
    let tree = match HuffmanTree::build(&table) {
        Some(tree) => tree,
        None => return Ok(Vec::new()),
    };
    let book = CodeBook::from_tree(&tree);

    // The padding count goes out first, so work out the stream length before packing.
    let stream_bits = book.stream_len(&table);
    let padding = BitPacker::padding_for(stream_bits);

    let mut out = Vec::new();
    write_header(&mut out, &table)?;

    let mut bp = BitPacker::new(1 + (stream_bits / 8) as usize + 1);
    bp.out8(padding);
    for &byte in data {
        let code = book[byte];
        bp.out_bits(code.bits, code.len);
    }
    let flushed = bp.flush();
    debug_assert_eq!(flushed, padding);

    debug!(
        "Encoded {} bytes with {} symbols into {} code bits ({} padding).",
        data.len(),
        book.len(),
        stream_bits,
        padding
    );
    out.extend_from_slice(&bp.output);
    Ok(out)
}

/// Decode a Huffman container produced by [`encode`]. Empty input gives empty output.
///
/// The output is never longer than the total of the frequency table. A stream of one
/// distinct byte carries no data bits, so a 12 byte container can describe up to
/// `u32::MAX` bytes of output. If that buffer cannot be allocated the call fails with
/// `CorruptStream` rather than aborting.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let (table, stream) = read_header(data)?;
    let tree = HuffmanTree::build(&table)
        .ok_or_else(|| Error::MalformedHeader("empty frequency table".to_string()))?;
    let total = table.total();

    let mut br = BitReader::new(stream);
    let padding = br.byte().ok_or(Error::TruncatedStream)?;
    if padding > 7 {
        return Err(Error::CorruptStream(format!(
            "padding count {} out of range",
            padding
        )));
    }
    if !br.truncate(padding as usize) {
        return Err(Error::CorruptStream(format!(
            "padding count {} exceeds the {} bits in the stream",
            padding,
            br.remaining()
        )));
    }
    trace!("Decoding {} data bits at {}.", br.remaining(), br.loc());

    // One symbol: its code is empty, so the count in the table is the only record of how
    // many times it repeats.
    if let Some(byte) = tree.single_leaf() {
        if br.remaining() != 0 {
            return Err(Error::CorruptStream(format!(
                "{} data bits for a single symbol stream",
                br.remaining()
            )));
        }
        let mut out = Vec::new();
        out.try_reserve_exact(total as usize).map_err(|_| {
            Error::CorruptStream(format!(
                "table describes {} bytes, more than can be allocated",
                total
            ))
        })?;
        out.resize(total as usize, byte);
        return Ok(out);
    }

    // Every code is at least one bit long.
    if total > br.remaining() as u64 {
        return Err(Error::CorruptStream(format!(
            "table describes {} bytes but only {} data bits follow",
            total,
            br.remaining()
        )));
    }

    let mut out = Vec::with_capacity(total as usize);
    let root = tree.root();
    let mut node = root;
    for bit in br {
        if let NodeData::Kids(left, right) = tree.node(node).node_data {
            node = if bit { right } else { left };
        }
        if let NodeData::Leaf(byte) = tree.node(node).node_data {
            out.push(byte);
            node = root;
        }
    }

    if node != root {
        return Err(Error::CorruptStream(
            "stream ended in the middle of a code".to_string(),
        ));
    }
    if out.len() as u64 != total {
        return Err(Error::CorruptStream(format!(
            "decoded {} bytes, frequency table describes {}",
            out.len(),
            total
        )));
    }
    debug!("Decoded {} bytes.", out.len());
    Ok(out)
}

/// The Huffman coder as a selectable [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl Codec for HuffmanCodec {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        encode(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        decode(data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_test() {
        assert!(encode(b"").unwrap().is_empty());
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn aaab_layout_test() {
        // b -> 0, a -> 1: stream is 1110, padded with four zeros.
        let out = encode(b"aaab").unwrap();
        assert_eq!(
            out,
            vec![0, 0, 0, 12, 0, 2, b'a', 0, 0, 0, 3, b'b', 0, 0, 0, 1, 4, 0b1110_0000]
        );
        assert_eq!(decode(&out).unwrap(), b"aaab");
    }

    #[test]
    fn byte_aligned_stream_has_no_padding_test() {
        // Eight one-bit codes fill one byte exactly.
        let out = encode(b"aaaabbbb").unwrap();
        let stream = &out[4 + 12..];
        assert_eq!(stream, &[0, 0b0000_1111]);
        assert_eq!(decode(&out).unwrap(), b"aaaabbbb");
    }

    #[test]
    fn three_equal_symbols_roundtrip_test() {
        let first = encode(b"abcabcabc").unwrap();
        let second = encode(b"abcabcabc").unwrap();
        assert_eq!(first, second);
        assert_eq!(decode(&first).unwrap(), b"abcabcabc");
    }

    #[test]
    fn single_symbol_test() {
        let data = vec![0_u8; 10_000];
        let out = encode(&data).unwrap();
        // 4 byte length, 2 byte entry count, one 5 byte entry, padding byte, no data
        assert_eq!(out.len(), 4 + 2 + 5 + 1);
        assert_eq!(decode(&out).unwrap(), data);
    }

    #[test]
    fn single_symbol_output_follows_table_test() {
        // 4 byte length, one entry of 0x41 x 2^20, padding 0, no data bits.
        let container = [0, 0, 0, 7, 0, 1, 0x41, 0, 0x10, 0, 0, 0];
        let out = decode(&container).unwrap();
        assert_eq!(out.len(), 1 << 20);
        assert!(out.iter().all(|&b| b == 0x41));
    }

    #[test]
    fn single_symbol_with_data_bits_test() {
        let mut out = encode(b"zzzz").unwrap();
        out.push(0xff);
        assert!(matches!(decode(&out), Err(Error::CorruptStream(_))));
    }

    #[test]
    fn missing_padding_field_test() {
        let out = encode(b"aaab").unwrap();
        let header_only = &out[..out.len() - 2];
        assert!(matches!(decode(header_only), Err(Error::TruncatedStream)));
    }

    #[test]
    fn truncated_header_test() {
        assert!(matches!(decode(&[0, 0]), Err(Error::MalformedHeader(_))));
        let out = encode(b"hello").unwrap();
        assert!(matches!(decode(&out[..8]), Err(Error::MalformedHeader(_))));
    }

    #[test]
    fn stream_ends_mid_code_test() {
        // c -> 0, a -> 10, b -> 11. Stream "1" (padding 7) stops halfway down to a or b.
        let mut out = encode(b"abcabcabc").unwrap();
        let header_end = out.len() - 3;
        out.truncate(header_end);
        out.extend_from_slice(&[7, 0b1000_0000]);
        assert!(matches!(decode(&out), Err(Error::CorruptStream(_))));
    }

    #[test]
    fn bad_padding_count_test() {
        let mut out = encode(b"aaab").unwrap();
        let pad_at = out.len() - 2;
        out[pad_at] = 9;
        assert!(matches!(decode(&out), Err(Error::CorruptStream(_))));
    }

    #[test]
    fn codec_trait_test() {
        let codec = HuffmanCodec;
        assert_eq!(codec.name(), "huffman");
        let data = b"polymorphic codecs share one shape";
        assert_eq!(codec.decode(&codec.encode(data).unwrap()).unwrap(), data);
    }
}
