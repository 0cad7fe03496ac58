//! The tools module provides helpers for the compressor.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Byte frequency table, the input of the Huffman tree builder.
//! - rle1: Run length codec, the alternative to Huffman coding.
//!
pub mod cli;
pub mod freq_count;
pub mod rle1;
