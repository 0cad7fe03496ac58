//! Framing for the Huffman container.
//!
//! The container is laid out as:
//!
//! | size      | field                                             |
//! |-----------|---------------------------------------------------|
//! | 4 bytes   | header length `L`, big endian                     |
//! | `L` bytes | frequency table                                   |
//! | rest      | packed stream, first byte is the padding count    |
//!
//! The frequency table is a big endian u16 entry count followed by one `(byte, u32 count)`
//! pair per entry, five bytes each, in strictly ascending byte order. Counts are never zero.
//!

use log::debug;

use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyTable;

/// Size of the length prefix.
pub const LEN_FIELD: usize = 4;
const ENTRY_SIZE: usize = 5;

/// Serialize `table`, length prefix first, onto `out`.
pub fn write_header(out: &mut Vec<u8>, table: &FrequencyTable) -> Result<()> {
    let entries = table.len();
    let header_len = 2 + entries * ENTRY_SIZE;
    out.reserve(LEN_FIELD + header_len);
    out.extend_from_slice(&(header_len as u32).to_be_bytes());
    out.extend_from_slice(&(entries as u16).to_be_bytes());
    for (byte, count) in table.iter() {
        let count = u32::try_from(count).map_err(|_| Error::InputTooLarge(count))?;
        out.push(byte);
        out.extend_from_slice(&count.to_be_bytes());
    }
    debug!("Wrote frequency table with {} entries ({} bytes).", entries, header_len);
    Ok(())
}

/// Parse the header at the front of `data`. Returns the table and the packed stream that
/// follows it.
pub fn read_header(data: &[u8]) -> Result<(FrequencyTable, &[u8])> {
    if data.len() < LEN_FIELD {
        return Err(Error::MalformedHeader(format!(
            "need {} bytes for the header length, found {}",
            LEN_FIELD,
            data.len()
        )));
    }
    let (len_field, rest) = data.split_at(LEN_FIELD);
    let header_len = u32::from_be_bytes([len_field[0], len_field[1], len_field[2], len_field[3]])
        as usize;
    if rest.len() < header_len {
        return Err(Error::MalformedHeader(format!(
            "header declares {} bytes but only {} follow",
            header_len,
            rest.len()
        )));
    }
    let (header, stream) = rest.split_at(header_len);
    let table = parse_table(header)?;
    debug!("Read frequency table with {} entries.", table.len());
    Ok((table, stream))
}

fn parse_table(header: &[u8]) -> Result<FrequencyTable> {
    if header.len() < 2 {
        return Err(Error::MalformedHeader("missing entry count".to_string()));
    }
    let entries = u16::from_be_bytes([header[0], header[1]]) as usize;
    if entries == 0 || entries > 256 {
        return Err(Error::MalformedHeader(format!("invalid entry count {}", entries)));
    }
    if header.len() != 2 + entries * ENTRY_SIZE {
        return Err(Error::MalformedHeader(format!(
            "{} entries need {} bytes, header has {}",
            entries,
            2 + entries * ENTRY_SIZE,
            header.len()
        )));
    }

    let mut entries_read = Vec::with_capacity(entries);
    let mut last: Option<u8> = None;
    for entry in header[2..].chunks_exact(ENTRY_SIZE) {
        let byte = entry[0];
        let count = u32::from_be_bytes([entry[1], entry[2], entry[3], entry[4]]);
        if last.map_or(false, |prev| prev >= byte) {
            return Err(Error::MalformedHeader(format!(
                "byte {} out of order in frequency table",
                byte
            )));
        }
        if count == 0 {
            return Err(Error::MalformedHeader(format!("zero count for byte {}", byte)));
        }
        entries_read.push((byte, count as u64));
        last = Some(byte);
    }
    Ok(entries_read.into_iter().collect())
}
