//! Image carriers loaded through the `image` crate.

use crate::carrier::ImageChannels;
use crate::config::LOSSY_IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// An image held as RGBA8 pixels.
///
/// Every input format is converted to RGBA8 on load so that the channel order seen
/// by [`ImageChannels`] is the same for PNG, BMP, greyscale or palette images.
#[derive(Debug, Clone)]
pub struct ImageCarrier {
    image: RgbaImage,
}

impl ImageCarrier {
    /// Load an image from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path).map_err(|e| Error::ImageLoad(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Load an image from encoded bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image =
            image::load_from_memory(bytes).map_err(|e| Error::ImageLoad(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Wrap a decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }

    /// Image width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Read-only channel view.
    pub fn channels(&self) -> ImageChannels<&[u8]> {
        ImageChannels::of(&self.image)
    }

    /// Writable channel view.
    pub fn channels_mut(&mut self) -> ImageChannels<&mut [u8]> {
        ImageChannels::of_mut(&mut self.image)
    }

    /// Save the image, choosing the encoder from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for lossy formats such as JPEG, whose
    /// re-compression would wipe the hidden bits.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        if LOSSY_IMAGE_EXTENSIONS
            .iter()
            .any(|lossy| extension.eq_ignore_ascii_case(lossy))
        {
            return Err(Error::UnsupportedFormat(format!(
                "lossy image format '{}' would destroy hidden data; use PNG or BMP",
                extension
            )));
        }

        self.image
            .save(path)
            .map_err(|e| Error::ImageSave(e.to_string()))
    }

    /// Encode the image as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| Error::ImageSave(e.to_string()))?;
        Ok(bytes)
    }

    /// The underlying pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
