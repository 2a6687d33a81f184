//! Base64 encoding (standard alphabet, padded).

use ::base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::trace;

use super::{utf8, Codec};
use crate::error::TransformError;

/// Standard Base64.
pub struct Base64;

impl Codec for Base64 {
    fn encode(&self, input: &str) -> String {
        STANDARD.encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        let trimmed = input.trim();
        trace!(codec = self.name(), len = trimmed.len(), "decoding");
        let bytes = STANDARD
            .decode(trimmed)
            .map_err(|e| TransformError::Base64(e.to_string()))?;
        utf8(bytes)
    }

    fn name(&self) -> &'static str {
        "base64"
    }
}
