//! Ciphers.
//!
//! Keyed transformations over text. Supports a classical Caesar shift and
//! AES-256-GCM.
//!
//! ## Ciphers
//!
//! - **Caesar**: rotates ASCII letters by a shift of 1 to 25.
//! - **AES**: AES-256-GCM keyed by the SHA-256 digest of a passphrase,
//!   output as Base64 of `nonce || ciphertext`.
//!
//! ## Adding a New Cipher
//!
//! 1. Implement the `Cipher` trait in a new file
//! 2. Add encrypt/decrypt variants to `Operation`
//! 3. Pair them in the inversion table

mod aes;
mod caesar;

pub use aes::Aes;
pub use caesar::{Caesar, Shift};

use crate::error::TransformError;

/// Keyed, reversible text cipher.
///
/// The key type is cipher-specific:
/// - Caesar: a validated [`Shift`]
/// - AES: a passphrase string
pub trait Cipher {
    /// Type of the key this cipher is parameterized by.
    type Key: ?Sized;

    /// Encrypt plaintext.
    ///
    /// # Errors
    ///
    /// Returns `TransformError` if the key is unusable.
    fn encrypt(&self, plaintext: &str, key: &Self::Key) -> Result<String, TransformError>;

    /// Decrypt ciphertext produced by [`Cipher::encrypt`] with the same key.
    ///
    /// # Errors
    ///
    /// Returns `TransformError` if the ciphertext is malformed or the key
    /// does not match.
    fn decrypt(&self, ciphertext: &str, key: &Self::Key) -> Result<String, TransformError>;

    /// Cipher name for logs.
    fn name(&self) -> &'static str;
}
