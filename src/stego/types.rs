//! Report types returned by the hide and capacity operations.

use serde::Serialize;

/// Outcome of a successful hide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HideSummary {
    /// Payload bits written after the header.
    pub payload_bits: usize,
    /// Total slots written, header included.
    pub frame_bits: usize,
    /// Slots available in the carrier.
    pub carrier_slots: usize,
    /// Whether the payload was password-obfuscated.
    pub obfuscated: bool,
}

/// How much a carrier can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    /// Sample slots in the carrier.
    pub slots: usize,
    /// Slots reserved for the length header.
    pub header_bits: usize,
    /// Payload bits that fit after the header.
    pub max_payload_bits: usize,
    /// Plain UTF-8 bytes that fit. Obfuscated text takes twice as many.
    pub max_text_bytes: usize,
}
