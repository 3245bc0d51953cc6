//! Configuration constants and types for LSB steganography.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Number of leading sample slots holding the big-endian payload bit length.
pub const LENGTH_HEADER_BITS: usize = 32;

/// Bits per payload byte.
pub const BITS_PER_BYTE: usize = 8;

/// Usable channels per pixel (R, G, B; alpha is never touched).
pub const IMAGE_SLOTS_PER_PIXEL: usize = 3;

/// Channels per pixel in the RGBA8 buffer images are converted to.
pub const RGBA_CHANNELS: usize = 4;

/// Image extensions whose encoders are lossy and would destroy hidden bits.
pub const LOSSY_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Extensions treated as WAV audio carriers.
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "wave"];

/// The kind of medium carrying the hidden message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierKind {
    /// RGB channels of an image.
    Image,
    /// 16-bit signed PCM samples of a WAV file.
    Audio,
}

impl CarrierKind {
    /// Guess the carrier kind from a file extension.
    ///
    /// `.wav` and `.wave` are audio; everything else is handed to the image decoder.
    pub fn from_path(path: &Path) -> Self {
        let is_audio = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                AUDIO_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            })
            .unwrap_or(false);

        if is_audio {
            CarrierKind::Audio
        } else {
            CarrierKind::Image
        }
    }
}

impl fmt::Display for CarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierKind::Image => f.write_str("image"),
            CarrierKind::Audio => f.write_str("audio"),
        }
    }
}

/// Options for a single hide or reveal operation.
#[derive(Debug, Clone, Default)]
pub struct StegoConfig {
    /// Password for XOR obfuscation. `None` embeds the text as-is.
    pub password: Option<String>,

    /// Carrier kind override. `None` detects it from the file extension.
    pub kind: Option<CarrierKind>,
}

impl StegoConfig {
    /// Create a configuration with the given password and kind override.
    pub fn new(password: Option<String>, kind: Option<CarrierKind>) -> Self {
        Self { password, kind }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if matches!(self.password.as_deref(), Some("")) {
            return Err(Error::InvalidInput("password must not be empty".to_string()));
        }
        Ok(())
    }

    /// Carrier kind for `path`, honouring the override.
    pub fn resolve_kind(&self, path: &Path) -> CarrierKind {
        self.kind.unwrap_or_else(|| CarrierKind::from_path(path))
    }
}
