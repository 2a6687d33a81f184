//! Text encodings.
//!
//! Encoders always succeed; decoders validate their input and require the
//! decoded bytes to be UTF-8 text, since every recipe value is text.
//!
//! ## Adding a New Encoding
//!
//! 1. Implement the `Codec` trait in a new file
//! 2. Add encode/decode variants to `Operation`
//! 3. Pair them in the inversion table

mod base64;
mod hex;

pub use self::base64::Base64;
pub use self::hex::Hex;

use crate::error::TransformError;

/// A reversible text encoding.
pub trait Codec {
    /// Encode text.
    fn encode(&self, input: &str) -> String;

    /// Decode text produced by [`Codec::encode`].
    ///
    /// # Errors
    ///
    /// Returns `TransformError` if the input is malformed or does not decode
    /// to UTF-8.
    fn decode(&self, input: &str) -> Result<String, TransformError>;

    /// Encoding name for logs.
    fn name(&self) -> &'static str;
}

pub(crate) fn utf8(bytes: Vec<u8>) -> Result<String, TransformError> {
    String::from_utf8(bytes).map_err(|_| TransformError::NotUtf8)
}
