//! Hexadecimal encoding (lowercase).

use tracing::trace;

use super::{utf8, Codec};
use crate::error::TransformError;

/// Lowercase hex, two digits per byte.
pub struct Hex;

impl Codec for Hex {
    fn encode(&self, input: &str) -> String {
        ::hex::encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        let digits: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        trace!(codec = self.name(), len = digits.len(), "decoding");
        let bytes = ::hex::decode(&digits).map_err(|e| TransformError::Hex(e.to_string()))?;
        utf8(bytes)
    }

    fn name(&self) -> &'static str {
        "hex"
    }
}
