//! AES-256-GCM cipher.
//!
//! The passphrase is hashed with SHA-256 to get the 256-bit key. Every
//! encryption draws a fresh random nonce, so encrypting the same text twice
//! gives different output; decryption is still exact.
//!
//! ## Output format
//!
//! ```text
//! base64( nonce (12 bytes) || ciphertext || tag (16 bytes) )
//! ```

use ::base64::{engine::general_purpose::STANDARD, Engine as _};
use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants::{NONCE_LEN, TAG_LEN};
use crate::error::TransformError;

/// AES-256-GCM keyed by a passphrase.
pub struct Aes;

impl Aes {
    fn cipher(passphrase: &str) -> Result<Aes256Gcm, TransformError> {
        if passphrase.is_empty() {
            return Err(TransformError::EmptyKey);
        }
        let key: Zeroizing<[u8; 32]> = Zeroizing::new(Sha256::digest(passphrase.as_bytes()).into());
        Ok(Aes256Gcm::new((&*key).into()))
    }
}

impl Cipher for Aes {
    type Key = str;

    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, TransformError> {
        trace!(cipher = self.name(), plaintext_len = plaintext.len(), "encrypt");

        let cipher = Self::cipher(key)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| TransformError::EncryptionFailed(e.to_string()))?;

        let mut combined = nonce.to_vec();
        combined.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(combined))
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, TransformError> {
        trace!(cipher = self.name(), ciphertext_len = ciphertext.len(), "decrypt");

        let cipher = Self::cipher(key)?;
        let data = STANDARD
            .decode(ciphertext.trim())
            .map_err(|e| TransformError::Base64(e.to_string()))?;
        if data.len() < NONCE_LEN + TAG_LEN {
            return Err(TransformError::CiphertextTooShort);
        }

        let (nonce, body) = data.split_at(NONCE_LEN);
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|_| TransformError::DecryptionFailed)?;
        String::from_utf8(plaintext).map_err(|_| TransformError::NotUtf8)
    }

    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }
}
