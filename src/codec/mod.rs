//! LSB embedding and extraction.
//!
//! One payload bit is stored per carrier slot. A slot whose LSB already matches
//! is left alone; otherwise it moves by exactly one unit, so no sample ever
//! changes by more than ±1.

mod guard;
mod lsb;

pub use guard::{ensure_capacity, max_text_bytes};
pub use lsb::{capacity, decode, embed_bit, encode, extract_bit};
