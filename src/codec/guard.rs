//! Capacity checks run before any carrier mutation.

use crate::config::{BITS_PER_BYTE, LENGTH_HEADER_BITS};
use crate::error::{Error, Result};

/// Ensure a frame of `needed` bits fits into `available` slots.
///
/// # Errors
///
/// Returns [`Error::CapacityExceeded`] if `needed > available`.
pub fn ensure_capacity(needed: usize, available: usize) -> Result<()> {
    if needed > available {
        return Err(Error::CapacityExceeded { needed, available });
    }
    Ok(())
}

/// Largest UTF-8 text, in bytes, that fits into `slots` after the length header.
pub fn max_text_bytes(slots: usize) -> usize {
    slots.saturating_sub(LENGTH_HEADER_BITS) / BITS_PER_BYTE
}
