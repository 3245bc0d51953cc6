//! Signed 16-bit PCM sample view.

use crate::carrier::{CarrierView, CarrierViewMut};

/// Exposes interleaved PCM samples one slot per sample, in file order.
///
/// Multi-channel audio keeps its interleaving (L, R, L, R, ...) so frames are
/// embedded across channels exactly as they were read.
#[derive(Debug)]
pub struct PcmSamples<B> {
    samples: B,
}

impl<B: AsRef<[i16]>> PcmSamples<B> {
    /// Wrap a buffer of interleaved samples.
    pub fn new(samples: B) -> Self {
        Self { samples }
    }
}

impl<B: AsRef<[i16]>> CarrierView for PcmSamples<B> {
    type Sample = i16;

    fn len(&self) -> usize {
        self.samples.as_ref().len()
    }

    fn sample(&self, index: usize) -> i16 {
        assert!(index < self.len(), "slot {index} out of range");
        self.samples.as_ref()[index]
    }
}

impl<B: AsRef<[i16]> + AsMut<[i16]>> CarrierViewMut for PcmSamples<B> {
    fn write_sample(&mut self, index: usize, value: i16) {
        assert!(index < self.len(), "slot {index} out of range");
        self.samples.as_mut()[index] = value;
    }
}
