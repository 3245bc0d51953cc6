//! Error types for LSB steganography.

use thiserror::Error;

/// Result type alias for steganography operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while hiding or revealing a message.
#[derive(Error, Debug)]
pub enum Error {
    /// Payload does not fit in the carrier. Raised before any sample is written.
    #[error("Carrier too small: need {needed} sample slots, have {available}")]
    CapacityExceeded { needed: usize, available: usize },

    /// The length header declares more bits than the carrier holds.
    #[error("Truncated data: header requires {needed} sample slots, carrier has {available}")]
    TruncatedData { needed: usize, available: usize },

    /// Obfuscated payload is not valid hexadecimal.
    #[error("Malformed hex payload: {0}")]
    MalformedHex(String),

    /// Bit count is not a whole number of bytes.
    #[error("Framing error: {bits} bits is not a multiple of 8")]
    Framing { bits: usize },

    /// De-obfuscated bytes are not valid UTF-8 (wrong password or corrupted carrier).
    #[error("Decryption failed: wrong password or corrupted data")]
    Decryption,

    /// Caller supplied an unusable argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error while reading or writing a carrier file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image could not be decoded.
    #[error("Image load error: {0}")]
    ImageLoad(String),

    /// Image could not be encoded or written.
    #[error("Image save error: {0}")]
    ImageSave(String),

    /// WAV file could not be read.
    #[error("Audio load error: {0}")]
    AudioLoad(String),

    /// WAV file could not be written.
    #[error("Audio save error: {0}")]
    AudioSave(String),

    /// Carrier format cannot hold LSB data.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Report serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
