//! Carrier sample views.
//!
//! The embedding algorithm never sees pixels or audio frames. It sees a flat,
//! 0-indexed sequence of scalar samples through [`CarrierView`] and writes back
//! through [`CarrierViewMut`]. Two adapters are provided:
//!
//! - [`ImageChannels`]: R, G, B channels of RGBA8 pixels in row-major order
//! - [`PcmSamples`]: interleaved signed 16-bit PCM samples

mod audio;
mod image;

pub use self::audio::PcmSamples;
pub use self::image::ImageChannels;

use std::fmt::Debug;

/// A scalar carrier sample with a bounded value range.
pub trait Sample: Copy + PartialEq + Debug {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Least significant bit (two's complement for signed samples).
    fn lsb(self) -> bool;

    /// Value one unit higher. Must not be called on [`Sample::MAX`].
    fn step_up(self) -> Self;

    /// Value one unit lower. Must not be called on [`Sample::MIN`].
    fn step_down(self) -> Self;
}

macro_rules! impl_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                fn lsb(self) -> bool {
                    self & 1 == 1
                }

                fn step_up(self) -> Self {
                    self + 1
                }

                fn step_down(self) -> Self {
                    self - 1
                }
            }
        )*
    };
}

impl_sample!(u8, i16);

/// Read access to a carrier as an ordered sequence of sample slots.
///
/// Slot order is fixed by the adapter and must be identical for reads and writes,
/// otherwise hidden bits land in one order and are read back in another.
pub trait CarrierView {
    /// Scalar type of each slot.
    type Sample: Sample;

    /// Number of sample slots available for embedding.
    fn len(&self) -> usize;

    /// Whether the carrier has no usable slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn sample(&self, index: usize) -> Self::Sample;

    /// Least significant bit of slot `index`.
    fn read_bit(&self, index: usize) -> bool {
        self.sample(index).lsb()
    }
}

/// Write access to a carrier's sample slots.
pub trait CarrierViewMut: CarrierView {
    /// Replace the value of slot `index` in the underlying buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn write_sample(&mut self, index: usize, value: Self::Sample);
}
