//! RGB channel view over an RGBA8 pixel buffer.

use crate::carrier::{CarrierView, CarrierViewMut};
use crate::config::{IMAGE_SLOTS_PER_PIXEL, RGBA_CHANNELS};
use image::RgbaImage;

/// Exposes the R, G and B channels of each RGBA8 pixel as consecutive slots.
///
/// Pixel `p` yields slots `3p`, `3p + 1`, `3p + 2`. Alpha is never read or written.
/// A trailing partial pixel in the raw buffer is ignored.
#[derive(Debug)]
pub struct ImageChannels<B> {
    raw: B,
}

impl<B: AsRef<[u8]>> ImageChannels<B> {
    /// Wrap a raw RGBA8 buffer (four bytes per pixel, row-major).
    pub fn new(raw: B) -> Self {
        Self { raw }
    }

    /// Number of whole pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.raw.as_ref().len() / RGBA_CHANNELS
    }

    fn offset(index: usize) -> usize {
        (index / IMAGE_SLOTS_PER_PIXEL) * RGBA_CHANNELS + index % IMAGE_SLOTS_PER_PIXEL
    }
}

impl<'a> ImageChannels<&'a [u8]> {
    /// Read-only view of an image's channels.
    pub fn of(image: &'a RgbaImage) -> Self {
        Self::new(&**image)
    }
}

impl<'a> ImageChannels<&'a mut [u8]> {
    /// Writable view of an image's channels.
    pub fn of_mut(image: &'a mut RgbaImage) -> Self {
        Self::new(&mut **image)
    }
}

impl<B: AsRef<[u8]>> CarrierView for ImageChannels<B> {
    type Sample = u8;

    fn len(&self) -> usize {
        self.pixel_count() * IMAGE_SLOTS_PER_PIXEL
    }

    fn sample(&self, index: usize) -> u8 {
        assert!(index < self.len(), "slot {index} out of range");
        self.raw.as_ref()[Self::offset(index)]
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CarrierViewMut for ImageChannels<B> {
    fn write_sample(&mut self, index: usize, value: u8) {
        assert!(index < self.len(), "slot {index} out of range");
        self.raw.as_mut()[Self::offset(index)] = value;
    }
}
