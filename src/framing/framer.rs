//! Conversion between text and length-prefixed bit frames.

use crate::config::{BITS_PER_BYTE, LENGTH_HEADER_BITS};
use crate::error::{Error, Result};
use crate::framing::BitStream;

/// Encode a bit count as a 32-bit big-endian header, most significant bit first.
pub fn encode_length_header(length: u32) -> [bool; LENGTH_HEADER_BITS] {
    let mut header = [false; LENGTH_HEADER_BITS];
    for (i, bit) in header.iter_mut().enumerate() {
        *bit = (length >> (LENGTH_HEADER_BITS - 1 - i)) & 1 == 1;
    }
    header
}

/// Decode a header written by [`encode_length_header`].
///
/// Bits beyond the first 32 are ignored; a shorter slice is read as if left-aligned.
pub fn decode_length_header(bits: &[bool]) -> u32 {
    bits.iter()
        .take(LENGTH_HEADER_BITS)
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit))
}

/// Frame `text` as a length header followed by its UTF-8 bits.
///
/// The header holds the number of data bits (eight per byte), not the byte count.
///
/// # Errors
///
/// Returns [`Error::CapacityExceeded`] if the bit count cannot be represented in the
/// 32-bit header.
///
/// # Example
///
/// ```
/// use lsb_steg::framing::{to_bits, to_text};
///
/// let frame = to_bits("HI").unwrap();
/// assert_eq!(frame.len(), 32 + 16);
/// assert_eq!(to_text(&frame.as_slice()[32..]).unwrap(), "HI");
/// ```
pub fn to_bits(text: &str) -> Result<BitStream> {
    let bytes = text.as_bytes();
    let data_bits = bytes.len() * BITS_PER_BYTE;
    let length = u32::try_from(data_bits).map_err(|_| Error::CapacityExceeded {
        needed: data_bits,
        available: u32::MAX as usize,
    })?;

    let mut stream = BitStream::with_capacity(LENGTH_HEADER_BITS + data_bits);
    stream.extend(encode_length_header(length));
    for &byte in bytes {
        stream.push_byte(byte);
    }

    Ok(stream)
}

/// Reassemble header-stripped bits into text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected, so a
/// damaged carrier still yields best-effort text.
///
/// # Errors
///
/// Returns [`Error::Framing`] if `bits` is not a whole number of bytes.
pub fn to_text(bits: &[bool]) -> Result<String> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(Error::Framing { bits: bits.len() });
    }

    let bytes: Vec<u8> = bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
        .collect();

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
