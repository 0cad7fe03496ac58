//! The bitstream module is the bit-level I/O layer for the Huffman container.
//!
//! Codes produced by the Huffman coder are variable length, so they are queued up and
//! written out a byte at a time, most significant bit first. The last byte is padded with
//! zero bits, and the number of filler bits is recorded so the reader can strip them again.
//!
//! Both sides work on in-memory buffers. Nothing here touches the file system.
//!
pub mod bitpacker;
pub mod bitreader;
