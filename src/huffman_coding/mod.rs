//! The huffman module holds the Huffman coder: tree building, code generation, the container
//! header and the encode/decode entry points.
//!
//! A buffer is compressed with one static tree. The tree itself is never stored. Instead the
//! byte frequencies are written into the container header and the decoder rebuilds the tree
//! from them. That only works because tree building is fully deterministic: nodes are
//! ordered by weight, and equal weights are ordered by byte value for leaves and by creation
//! order for merged nodes, with leaves ahead of merged nodes.
//!
//! Each call works on one complete buffer and is single threaded. Independent calls share
//! nothing and may run in parallel.
//!

pub mod code_book;
pub mod codec;
pub mod header;
pub mod huffman;
