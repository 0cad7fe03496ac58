//! Errors reported by the codecs and the file front end.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Header length field absent or truncated, or the frequency table does not parse.
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    /// Fewer than 8 bits are available for the padding field.
    #[error("truncated stream: no room for the padding field")]
    TruncatedStream,
    /// The bit walk ran out of input, or the output does not match the frequency table.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),
    /// A symbol occurs more often than the 4-byte header count can hold.
    #[error("input too large: a symbol count of {0} does not fit in the header")]
    InputTooLarge(u64),
    /// An RLE stream ended in the middle of a (count, byte) pair.
    #[error("malformed RLE stream: dangling count at offset {0}")]
    MalformedRle(usize),
    #[error("unknown codec '{0}'")]
    UnknownCodec(String),
    /// A compressed file name is not of the form <name>_<codec>_compressed[.ext].
    #[error("invalid compressed file name '{0}', expected <name>_<codec>_compressed.<ext>")]
    BadFileName(String),
    #[error("{0} already exists, use --force to overwrite")]
    OutputExists(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
