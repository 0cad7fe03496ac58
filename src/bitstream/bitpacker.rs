/// Packs variable length bit codes into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified. Call flush()
    /// before reading the output or the last partial byte is left in the queue.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Number of bits a stream of `bits` length needs to reach a byte boundary (0-7).
    pub fn padding_for(bits: u64) -> u8 {
        ((8 - bits % 8) % 8) as u8
    }

    /// Internal write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /*
    NOTE: out_bits takes the code right aligned in a u64 and its length. Only the
    `len` least significant bits are written, the rest of the word is masked out.
    Eg out_bits(0b0010, 4) writes out 0010.
    Codes are fed into the queue in pieces of at most 32 bits so the queue (which
    never holds more than 7 bits between writes) cannot overflow.
    */
    /// Writes the `len` (0-64) least significant bits of `code`.
    pub fn out_bits(&mut self, code: u64, len: u8) {
        let mut left = len;
        while left > 0 {
            let depth = left.min(32);
            left -= depth;
            let piece = (code >> left) & (u64::MAX >> (64 - depth));
            self.queue <<= depth; //shift queue by bit length
            self.queue |= piece; //add data portion to queue
            self.q_bits += depth; //update depth of queue bits
            self.write_stream();
        }
    }

    /// Puts an 8 bit byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_bits(data as u64, 8);
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits. Returns the number of padding bits added.
    pub fn flush(&mut self) -> u8 {
        let padding = Self::padding_for(self.q_bits as u64);
        if self.q_bits > 0 {
            self.queue <<= padding; //pad the queue with zeros
            self.q_bits += padding;
            self.write_stream(); // write out all that is left
        }
        padding
    }

    /// Total bits written so far, excluding padding.
    pub fn bit_len(&self) -> u64 {
        self.output.len() as u64 * 8 + self.q_bits as u64
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_len() / 8, self.bit_len() % 8)
    }
}
