//! Single-bit-per-sample embedding.

use crate::carrier::{CarrierView, CarrierViewMut, Sample};
use crate::codec::guard::ensure_capacity;
use crate::config::LENGTH_HEADER_BITS;
use crate::error::{Error, Result};
use crate::framing::{decode_length_header, BitStream};

/// Return `sample` adjusted so its LSB equals `bit`.
///
/// Matching samples are returned unchanged. Otherwise the value is incremented,
/// except at [`Sample::MAX`] where it is decremented. The increment bias is part of
/// the carrier format and must not be randomised.
///
/// # Example
///
/// ```
/// use lsb_steg::codec::embed_bit;
///
/// assert_eq!(embed_bit(255u8, false), 254);
/// assert_eq!(embed_bit(0u8, true), 1);
/// assert_eq!(embed_bit(-32768i16, true), -32767);
/// ```
pub fn embed_bit<S: Sample>(sample: S, bit: bool) -> S {
    if sample.lsb() == bit {
        sample
    } else if sample == S::MAX {
        sample.step_down()
    } else {
        sample.step_up()
    }
}

/// Return the LSB of `sample`.
pub fn extract_bit<S: Sample>(sample: S) -> bool {
    sample.lsb()
}

/// Number of bits `view` can hold, header included.
pub fn capacity<V: CarrierView + ?Sized>(view: &V) -> usize {
    view.len()
}

/// Write `bits` into the first `bits.len()` slots of `view`.
///
/// Slots past the end of the frame are not touched.
///
/// # Errors
///
/// Returns [`Error::CapacityExceeded`] if the frame is longer than the carrier. The
/// check happens before the first write, so a failed call leaves `view` unchanged.
pub fn encode<V: CarrierViewMut + ?Sized>(view: &mut V, bits: &BitStream) -> Result<()> {
    ensure_capacity(bits.len(), capacity(&*view))?;

    for (index, bit) in bits.iter().enumerate() {
        let sample = view.sample(index);
        let embedded = embed_bit(sample, bit);
        if embedded != sample {
            view.write_sample(index, embedded);
        }
    }

    Ok(())
}

/// Read a frame from `view` and return its payload bits, header stripped.
///
/// The payload length is not required to be a whole number of bytes here; that is
/// checked when the bits are turned back into text.
///
/// # Errors
///
/// Returns [`Error::TruncatedData`] if the carrier cannot hold a header, or holds
/// fewer slots than the header declares.
pub fn decode<V: CarrierView + ?Sized>(view: &V) -> Result<BitStream> {
    let available = capacity(view);
    if available < LENGTH_HEADER_BITS {
        return Err(Error::TruncatedData {
            needed: LENGTH_HEADER_BITS,
            available,
        });
    }

    let header: Vec<bool> = (0..LENGTH_HEADER_BITS).map(|i| view.read_bit(i)).collect();
    let length = decode_length_header(&header) as usize;

    let end = LENGTH_HEADER_BITS
        .checked_add(length)
        .filter(|&end| end <= available)
        .ok_or(Error::TruncatedData {
            needed: LENGTH_HEADER_BITS.saturating_add(length),
            available,
        })?;

    Ok((LENGTH_HEADER_BITS..end).map(|i| view.read_bit(i)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::{ImageChannels, PcmSamples};
    use crate::framing::{to_bits, to_text};

    #[test]
    fn test_embed_boundary_values() {
        assert_eq!(embed_bit(255u8, false), 254);
        assert_eq!(embed_bit(0u8, true), 1);
        assert_eq!(embed_bit(i16::MIN, true), -32767);
        assert_eq!(embed_bit(i16::MAX, false), 32766);
    }

    #[test]
    fn test_embed_prefers_increment() {
        assert_eq!(embed_bit(100u8, true), 101);
        assert_eq!(embed_bit(101u8, false), 102);
        assert_eq!(embed_bit(-3i16, false), -2);
        assert_eq!(embed_bit(-2i16, true), -1);
    }

    #[test]
    fn test_embed_noop_when_lsb_matches() {
        for sample in 0..=255u8 {
            assert_eq!(embed_bit(sample, sample & 1 == 1), sample);
        }
        for sample in [i16::MIN, -1, 0, 1, i16::MAX] {
            assert_eq!(embed_bit(sample, sample & 1 == 1), sample);
        }
    }

    #[test]
    fn test_embed_minimal_perturbation_u8() {
        for sample in 0..=255u8 {
            for bit in [false, true] {
                let embedded = embed_bit(sample, bit);
                assert!((i32::from(embedded) - i32::from(sample)).abs() <= 1);
                assert_eq!(extract_bit(embedded), bit);
            }
        }
    }

    #[test]
    fn test_embed_minimal_perturbation_i16() {
        for sample in (i16::MIN..=i16::MAX).step_by(7).chain([i16::MIN, i16::MAX]) {
            for bit in [false, true] {
                let embedded = embed_bit(sample, bit);
                assert!((i32::from(embedded) - i32::from(sample)).abs() <= 1);
                assert_eq!(extract_bit(embedded), bit);
            }
        }
    }

    #[test]
    fn test_hi_occupies_first_48_slots() {
        let mut raw = vec![0u8; 64 / 3 * 4 + 4];
        let mut view = ImageChannels::new(raw.as_mut_slice());
        assert!(capacity(&view) >= 64);

        let frame = to_bits("HI").unwrap();
        encode(&mut view, &frame).unwrap();

        let payload = decode(&view).unwrap();
        assert_eq!(payload.len(), 16);
        assert_eq!(to_text(payload.as_slice()).unwrap(), "HI");

        // all-zero carrier: slots past the frame stay zero
        for i in 48..view.len() {
            assert_eq!(view.sample(i), 0);
        }
    }

    #[test]
    fn test_capacity_exceeded_leaves_carrier_untouched() {
        let original: Vec<i16> = (0..20).map(|i| i * 3).collect();
        let mut samples = original.clone();
        let mut view = PcmSamples::new(samples.as_mut_slice());

        let frame = to_bits("HI").unwrap();
        let result = encode(&mut view, &frame);

        assert!(matches!(
            result,
            Err(Error::CapacityExceeded {
                needed: 48,
                available: 20
            })
        ));
        assert_eq!(samples, original);
    }

    #[test]
    fn test_exact_capacity_boundary() {
        let frame = to_bits("HI").unwrap();

        let mut exact = vec![5i16; 48];
        encode(&mut PcmSamples::new(exact.as_mut_slice()), &frame).unwrap();
        let payload = decode(&PcmSamples::new(&exact[..])).unwrap();
        assert_eq!(to_text(payload.as_slice()).unwrap(), "HI");

        let mut short = vec![5i16; 47];
        let result = encode(&mut PcmSamples::new(short.as_mut_slice()), &frame);
        assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
        assert!(short.iter().all(|&s| s == 5));
    }

    #[test]
    fn test_decode_truncated_header() {
        let samples = vec![0i16; 31];
        let result = decode(&PcmSamples::new(&samples[..]));

        assert!(matches!(
            result,
            Err(Error::TruncatedData {
                needed: 32,
                available: 31
            })
        ));
    }

    #[test]
    fn test_decode_declared_length_too_long() {
        // header declares 0xFFFF_FFFF bits
        let samples = vec![1i16; 64];
        let result = decode(&PcmSamples::new(&samples[..]));

        assert!(matches!(result, Err(Error::TruncatedData { available: 64, .. })));
    }

    #[test]
    fn test_decode_does_not_require_whole_bytes() {
        let mut frame = BitStream::from(crate::framing::encode_length_header(3).to_vec());
        frame.extend([true, false, true]);

        let mut samples = vec![0i16; 40];
        encode(&mut PcmSamples::new(samples.as_mut_slice()), &frame).unwrap();

        let payload = decode(&PcmSamples::new(&samples[..])).unwrap();
        assert_eq!(payload.as_slice(), &[true, false, true]);
    }

    #[test]
    fn test_empty_frame_decodes_empty() {
        let mut samples = vec![1i16; 32];
        encode(&mut PcmSamples::new(samples.as_mut_slice()), &to_bits("").unwrap()).unwrap();

        assert!(samples.iter().all(|&s| s == 2));
        assert!(decode(&PcmSamples::new(&samples[..])).unwrap().is_empty());
    }
}
