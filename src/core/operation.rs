//! The closed set of operations a recipe can contain.
//!
//! Each variant knows its display name, the parameter it needs and how to
//! apply itself. Names are resolved to variants once, when a step is created
//! or a recipe file is read, so execution never dispatches on strings.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::cipher::{Aes, Caesar, Cipher, Shift};
use crate::core::codec::{Base64, Codec, Hex};
use crate::core::constants::{KEY_PARAM, SHIFT_PARAM};
use crate::core::types::Params;
use crate::error::{RecipeError, TransformError};

/// A registered transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    ToBase64,
    FromBase64,
    ToHex,
    FromHex,
    CaesarEncrypt,
    CaesarDecrypt,
    AesEncrypt,
    AesDecrypt,
}

/// The parameter an operation needs before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    None,
    NumericShift,
    StringKey,
}

impl ParamKind {
    /// Name of the parameter in a step's map, if any.
    pub fn param_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::NumericShift => Some(SHIFT_PARAM),
            Self::StringKey => Some(KEY_PARAM),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::NumericShift => write!(f, "shift (1-25)"),
            Self::StringKey => write!(f, "key"),
        }
    }
}

/// Grouping used when listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Encoders,
    Decoders,
    Ciphers,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Encoders => "Encoders",
            Self::Decoders => "Decoders",
            Self::Ciphers => "Ciphers",
        };
        f.write_str(label)
    }
}

impl Operation {
    /// Every operation, in listing order.
    pub const ALL: [Operation; 8] = [
        Operation::FromBase64,
        Operation::ToBase64,
        Operation::FromHex,
        Operation::ToHex,
        Operation::CaesarEncrypt,
        Operation::CaesarDecrypt,
        Operation::AesEncrypt,
        Operation::AesDecrypt,
    ];

    /// Display name, as stored in recipe files.
    pub fn name(self) -> &'static str {
        match self {
            Self::ToBase64 => "To Base64",
            Self::FromBase64 => "From Base64",
            Self::ToHex => "To Hex",
            Self::FromHex => "From Hex",
            Self::CaesarEncrypt => "Caesar Encrypt",
            Self::CaesarDecrypt => "Caesar Decrypt",
            Self::AesEncrypt => "AES Encrypt",
            Self::AesDecrypt => "AES Decrypt",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::ToBase64 | Self::ToHex => Category::Encoders,
            Self::FromBase64 | Self::FromHex => Category::Decoders,
            _ => Category::Ciphers,
        }
    }

    pub fn param_kind(self) -> ParamKind {
        match self {
            Self::CaesarEncrypt | Self::CaesarDecrypt => ParamKind::NumericShift,
            Self::AesEncrypt | Self::AesDecrypt => ParamKind::StringKey,
            _ => ParamKind::None,
        }
    }

    /// Apply this operation to `input`.
    ///
    /// Parameters are validated here rather than when the step is added, so
    /// a step may sit in a recipe with an empty or partial parameter until it
    /// is run.
    ///
    /// # Errors
    ///
    /// Returns the transform's own error; it never panics on bad input.
    pub fn apply(self, input: &str, params: &Params) -> Result<String, TransformError> {
        match self {
            Self::ToBase64 => Ok(Base64.encode(input)),
            Self::FromBase64 => Base64.decode(input),
            Self::ToHex => Ok(Hex.encode(input)),
            Self::FromHex => Hex.decode(input),
            Self::CaesarEncrypt => Caesar.encrypt(input, &Shift::from_params(params)?),
            Self::CaesarDecrypt => Caesar.decrypt(input, &Shift::from_params(params)?),
            Self::AesEncrypt => Aes.encrypt(input, key_param(params)?),
            Self::AesDecrypt => Aes.decrypt(input, key_param(params)?),
        }
    }
}

fn key_param(params: &Params) -> Result<&str, TransformError> {
    params
        .get(KEY_PARAM)
        .map(String::as_str)
        .ok_or(TransformError::MissingParam(KEY_PARAM))
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| RecipeError::UnknownOperation(s.to_string()))
    }
}
