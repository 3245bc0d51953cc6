//! Hide and reveal text in a carrier view.

use crate::carrier::{CarrierView, CarrierViewMut};
use crate::codec::{self, max_text_bytes};
use crate::config::{BITS_PER_BYTE, LENGTH_HEADER_BITS};
use crate::crypto::Obfuscator;
use crate::error::Result;
use crate::framing::{to_bits, to_text};
use crate::stego::types::{CapacityReport, HideSummary};

/// Hide `text` in `view`, obfuscating it first when a password is given.
///
/// # Errors
///
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) for an empty password.
/// - [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) if the frame does not
///   fit; `view` is left unchanged.
///
/// # Example
///
/// ```
/// use lsb_steg::carrier::PcmSamples;
/// use lsb_steg::stego::{hide_text, reveal_text};
///
/// let mut samples = vec![0i16; 256];
/// hide_text(&mut PcmSamples::new(samples.as_mut_slice()), "HI", Some("pw")).unwrap();
///
/// let text = reveal_text(&PcmSamples::new(&samples[..]), Some("pw")).unwrap();
/// assert_eq!(text, "HI");
/// ```
pub fn hide_text<V: CarrierViewMut + ?Sized>(
    view: &mut V,
    text: &str,
    password: Option<&str>,
) -> Result<HideSummary> {
    let payload = match password {
        Some(password) => Obfuscator::new(password)?.encrypt(text),
        None => text.to_string(),
    };

    let frame = to_bits(&payload)?;
    let carrier_slots = codec::capacity(&*view);
    codec::encode(view, &frame)?;

    Ok(HideSummary {
        payload_bits: frame.len() - LENGTH_HEADER_BITS,
        frame_bits: frame.len(),
        carrier_slots,
        obfuscated: password.is_some(),
    })
}

/// Recover text hidden with [`hide_text`].
///
/// On a carrier that never held a message the header is noise: either the
/// declared length overruns the carrier or garbage text comes back. A trailing
/// partial byte is dropped before the bits are turned into text.
///
/// # Errors
///
/// - [`Error::TruncatedData`](crate::Error::TruncatedData) if the header overruns the carrier.
/// - [`Error::MalformedHex`](crate::Error::MalformedHex) or
///   [`Error::Decryption`](crate::Error::Decryption) when de-obfuscation fails.
pub fn reveal_text<V: CarrierView + ?Sized>(view: &V, password: Option<&str>) -> Result<String> {
    let payload = codec::decode(view)?;
    let whole_bytes = payload.len() / BITS_PER_BYTE * BITS_PER_BYTE;
    let text = to_text(&payload.as_slice()[..whole_bytes])?;

    match password {
        Some(password) => Obfuscator::new(password)?.decrypt(&text),
        None => Ok(text),
    }
}

/// Describe how much `view` can hold.
pub fn capacity_report<V: CarrierView + ?Sized>(view: &V) -> CapacityReport {
    let slots = codec::capacity(view);
    CapacityReport {
        slots,
        header_bits: LENGTH_HEADER_BITS,
        max_payload_bits: slots.saturating_sub(LENGTH_HEADER_BITS),
        max_text_bytes: max_text_bytes(slots),
    }
}
