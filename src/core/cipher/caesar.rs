//! Caesar cipher.

use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::trace;

use super::Cipher;
use crate::core::constants::{ALPHABET_LEN, SHIFT_MAX, SHIFT_MIN, SHIFT_PARAM};
use crate::core::types::Params;
use crate::error::TransformError;

/// A validated Caesar shift in `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift(u8);

impl Shift {
    /// Read and validate the `shift` parameter of a step.
    ///
    /// # Errors
    ///
    /// Each failure has its own message: missing parameter, not an integer,
    /// or out of range.
    pub fn from_params(params: &Params) -> Result<Self, TransformError> {
        params
            .get(SHIFT_PARAM)
            .ok_or(TransformError::MissingParam(SHIFT_PARAM))?
            .parse()
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for Shift {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let out_of_range = TransformError::ShiftOutOfRange {
            min: SHIFT_MIN,
            max: SHIFT_MAX,
        };
        let value: i64 = s.trim().parse().map_err(|e: std::num::ParseIntError| {
            match e.kind() {
                // still an integer, just a very large one
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range.clone(),
                _ => TransformError::ShiftNotInteger,
            }
        })?;
        if !(SHIFT_MIN..=SHIFT_MAX).contains(&value) {
            return Err(out_of_range);
        }
        Ok(Self(value as u8))
    }
}

/// Caesar cipher over ASCII letters. Case is preserved, everything else
/// passes through.
pub struct Caesar;

impl Caesar {
    fn rotate(text: &str, by: u8) -> String {
        text.chars()
            .map(|c| match c {
                'a'..='z' => rotate_within(c, b'a', by),
                'A'..='Z' => rotate_within(c, b'A', by),
                _ => c,
            })
            .collect()
    }
}

fn rotate_within(c: char, base: u8, by: u8) -> char {
    let offset = (c as u8 - base + by) % ALPHABET_LEN;
    (base + offset) as char
}

impl Cipher for Caesar {
    type Key = Shift;

    fn encrypt(&self, plaintext: &str, key: &Shift) -> Result<String, TransformError> {
        trace!(cipher = self.name(), shift = key.get(), "encrypt");
        Ok(Self::rotate(plaintext, key.get()))
    }

    fn decrypt(&self, ciphertext: &str, key: &Shift) -> Result<String, TransformError> {
        trace!(cipher = self.name(), shift = key.get(), "decrypt");
        Ok(Self::rotate(ciphertext, ALPHABET_LEN - key.get()))
    }

    fn name(&self) -> &'static str {
        "caesar"
    }
}
