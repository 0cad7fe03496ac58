//! Turns a Huffman tree into the byte -> code mapping used by the encoder.
//!
//! Codes are read off the tree root to leaf: a step to the left child appends a 0, a step to
//! the right appends a 1. Because only leaves carry codes, no code is a prefix of another.
//!

use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, NodeData, NodeId};
use crate::tools::freq_count::FrequencyTable;

/// A code of `len` bits, right aligned in `bits`, first bit most significant.
///
/// Trees built from tables whose counts fit the container header are far shallower than
/// 64 levels, so a u64 always holds the code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// This code with one more bit appended.
    fn push(self, bit: bool) -> Code {
        Code {
            bits: self.bits << 1 | bit as u64,
            len: self.len + 1,
        }
    }

    /// The code as a string of '0' and '1'.
    pub fn to_bit_string(&self) -> String {
        (0..self.len)
            .rev()
            .map(|i| if (self.bits >> i) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    /// True if `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other
                .bits
                .checked_shr((other.len - self.len) as u32)
                .unwrap_or(0)
                == self.bits
    }
}

/// Byte -> code mapping for every leaf of a tree.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: FxHashMap<u8, Code>,
}

impl CodeBook {
    /// Walk `tree` and record the path to every leaf.
    ///
    /// A tree that is a single leaf gives that byte the empty code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = FxHashMap::default();
        collect_codes(tree, tree.root(), Code::default(), &mut codes);
        CodeBook { codes }
    }

    pub fn get(&self, byte: u8) -> Option<Code> {
        self.codes.get(&byte).copied()
    }

    /// Number of bytes with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (byte, code) pairs in ascending byte order.
    pub fn sorted(&self) -> Vec<(u8, Code)> {
        let mut pairs: Vec<(u8, Code)> = self.codes.iter().map(|(&b, &c)| (b, c)).collect();
        pairs.sort_unstable_by_key(|&(byte, _)| byte);
        pairs
    }

    /// Bits needed to encode the buffer `table` was counted from.
    pub fn stream_len(&self, table: &FrequencyTable) -> u64 {
        table
            .iter()
            .map(|(byte, count)| count * self.get(byte).map_or(0, |code| code.len as u64))
            .sum()
    }
}

impl std::ops::Index<u8> for CodeBook {
    type Output = Code;
    fn index(&self, byte: u8) -> &Code {
        &self.codes[&byte]
    }
}

/// Recursively walk the tree, recording the accumulated path at each leaf.
fn collect_codes(tree: &HuffmanTree, id: NodeId, code: Code, codes: &mut FxHashMap<u8, Code>) {
    match tree.node(id).node_data {
        NodeData::Kids(left, right) => {
            collect_codes(tree, left, code.push(false), codes);
            collect_codes(tree, right, code.push(true), codes);
        }
        NodeData::Leaf(byte) => {
            codes.insert(byte, code);
        }
    }
}
