//! Repeating-key XOR obfuscation.

use crate::error::{Error, Result};

/// XOR keystream built from a password.
///
/// Byte `i` of the input is combined with byte `i % key.len()` of the password's
/// UTF-8 encoding. Applying the transform twice restores the input.
#[derive(Debug, Clone)]
pub struct Obfuscator {
    key: Vec<u8>,
}

impl Obfuscator {
    /// Create an obfuscator keyed by `password`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `password` is empty.
    pub fn new(password: &str) -> Result<Self> {
        if password.is_empty() {
            return Err(Error::InvalidInput("password must not be empty".to_string()));
        }
        Ok(Self {
            key: password.as_bytes().to_vec(),
        })
    }

    /// XOR `data` with the keystream in place.
    pub fn apply(&self, data: &mut [u8]) {
        for (byte, key) in data.iter_mut().zip(self.key.iter().cycle()) {
            *byte ^= key;
        }
    }

    /// Obfuscate `text` and return it as lowercase hex.
    pub fn encrypt(&self, text: &str) -> String {
        let mut data = text.as_bytes().to_vec();
        self.apply(&mut data);
        hex::encode(data)
    }

    /// Reverse [`Obfuscator::encrypt`].
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedHex`] if `encoded` is not valid hex.
    /// - [`Error::Decryption`] if the recovered bytes are not UTF-8, which almost
    ///   always means the password is wrong.
    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let mut data = hex::decode(encoded).map_err(|e| Error::MalformedHex(e.to_string()))?;
        self.apply(&mut data);
        String::from_utf8(data).map_err(|_| Error::Decryption)
    }
}

/// Obfuscate `text` with `password`, returning lowercase hex.
pub fn encrypt(text: &str, password: &str) -> Result<String> {
    Ok(Obfuscator::new(password)?.encrypt(text))
}

/// Recover text obfuscated with [`encrypt`].
pub fn decrypt(encoded: &str, password: &str) -> Result<String> {
    Obfuscator::new(password)?.decrypt(encoded)
}
