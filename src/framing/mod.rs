//! Bit framing of text payloads.
//!
//! A frame is a 32-bit big-endian bit count followed by the UTF-8 bytes of the text,
//! each byte written most-significant bit first.

mod bitstream;
mod framer;

pub use bitstream::BitStream;
pub use framer::{decode_length_header, encode_length_header, to_bits, to_text};
