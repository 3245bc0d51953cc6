//! Carrier file adapters.
//!
//! This module handles:
//! - Decoding images to RGBA8 and saving them losslessly
//! - Reading and writing 16-bit PCM WAV files
//! - Dispatching hide/reveal to the right sample view

mod carrier_file;
mod image_file;
mod wav_file;

pub use carrier_file::CarrierFile;
pub use image_file::ImageCarrier;
pub use wav_file::WavCarrier;
