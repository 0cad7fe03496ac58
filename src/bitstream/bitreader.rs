//! BitReader: reads a packed bitstream, most significant bit first.
//!
//! The reader borrows the packed bytes and can be told to stop short of the end, which is
//! how the trailing padding bits of a Huffman stream are kept out of the decoder.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits from a packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Total number of readable bits. Bits past this point are never returned.
    end: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over all of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            end: buffer.len() * 8,
        }
    }

    /// Drop the last `n` bits of the stream from view. Returns false if fewer than `n`
    /// bits are still unread.
    pub fn truncate(&mut self, n: usize) -> bool {
        if n > self.remaining() {
            return false;
        }
        self.end -= n;
        true
    }

    /// Number of bits consumed so far.
    fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of unread bits.
    pub fn remaining(&self) -> usize {
        self.end - self.position()
    }

    /// Return bit as Option<u8> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<u8> {
        if self.remaining() == 0 {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Return Option<bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (n <= usize::BITS), or None without
    /// consuming anything if fewer than n bits are left.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        if n > self.remaining() {
            return None;
        }
        let mut result = 0_usize;
        for _ in 0..n {
            result = result << 1 | self.bit()? as usize;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }
}
