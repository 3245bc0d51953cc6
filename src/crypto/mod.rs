//! Password obfuscation of payload text.
//!
//! This module provides a repeating-key XOR transform with hex encoding so the
//! obfuscated bytes can be framed like ordinary text. It offers no confidentiality
//! against analysis: there is no key derivation and no authentication.

mod obfuscator;

pub use obfuscator::{decrypt, encrypt, Obfuscator};
