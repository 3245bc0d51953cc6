//! LSB Text Steganography
//!
//! Hides UTF-8 text in the least significant bits of image channels or 16-bit PCM
//! audio samples, and recovers it bit-exactly.
//!
//! # Features
//!
//! - **One carrier-agnostic embedding loop**: images and audio are both seen as a
//!   flat sequence of sample slots through [`carrier::CarrierView`]
//! - **Minimal perturbation**: every sample changes by at most ±1
//! - **All-or-nothing writes**: capacity is checked before the first sample changes
//! - **Password obfuscation**: optional repeating-key XOR, hex encoded
//!
//! # Architecture
//!
//! ```text
//! Text → Obfuscate (XOR, optional) → Frame (32-bit length + bits) → Embed (LSB)
//! ```
//!
//! The first 32 slots hold the payload bit count, big-endian, most significant bit
//! in slot 0. There is no magic number or version field.
//!
//! # Example
//!
//! ```rust,no_run
//! use lsb_steg::storage::ImageCarrier;
//! use lsb_steg::stego::{hide_text, reveal_text};
//!
//! let mut cover = ImageCarrier::open("cover.png").unwrap();
//! hide_text(&mut cover.channels_mut(), "Hidden data", Some("password")).unwrap();
//! cover.save("stego.png").unwrap();
//!
//! let stego = ImageCarrier::open("stego.png").unwrap();
//! let text = reveal_text(&stego.channels(), Some("password")).unwrap();
//! assert_eq!(text, "Hidden data");
//! ```

pub mod carrier;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod framing;
pub mod stego;
pub mod storage;

pub use config::{CarrierKind, StegoConfig};
pub use error::{Error, Result};
pub use storage::CarrierFile;
