//! Error types for ladle.
//!
//! One crate-level [`Error`] wraps an enum per concern so callers can match
//! on the kind of failure without parsing messages.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// A single transform refused its input or parameters.
///
/// The display strings are shown to the user verbatim as the step's failure
/// message, so they are phrased as sentences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Could not find {0} parameter.")]
    MissingParam(&'static str),

    #[error("Invalid shift value. Must be an integer.")]
    ShiftNotInteger,

    #[error("Shift must be between {min} and {max}.")]
    ShiftOutOfRange { min: i64, max: i64 },

    #[error("Key must not be empty.")]
    EmptyKey,

    #[error("Invalid Base64 input: {0}")]
    Base64(String),

    #[error("Invalid hex input: {0}")]
    Hex(String),

    #[error("Decoded data is not valid UTF-8 text.")]
    NotUtf8,

    #[error("Ciphertext is too short to contain a nonce and tag.")]
    CiphertextTooShort,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: wrong key or corrupted ciphertext.")]
    DecryptionFailed,
}

/// Running a recipe did not produce an output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("The input field is empty.")]
    EmptyInput,

    #[error("The recipe has no operations.")]
    EmptyRecipe,

    #[error("Step {} '{operation}' failed: {message}", .index + 1)]
    StepFailed {
        index: usize,
        operation: String,
        message: String,
    },
}

impl ExecutionError {
    /// Whether this is a precondition failure rather than a failed step.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::EmptyRecipe)
    }
}

/// Recipe model and recipe file errors.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("unknown operation: '{0}'")]
    UnknownOperation(String),

    #[error("Recipe is empty, nothing to save.")]
    Empty,

    #[error("no step at position {0}")]
    StepNotFound(usize),

    #[error("'{operation}' takes no {param} parameter")]
    UnexpectedParam {
        operation: String,
        param: &'static str,
    },

    #[error("refusing to delete {} without confirmation (pass --yes)", .0.display())]
    ConfirmationRequired(PathBuf),

    #[error("failed to read recipe {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write recipe {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed recipe file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize recipe: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// System clipboard errors.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard command found (install xclip, xsel or wl-clipboard, or set [clipboard] in config)")]
    Unavailable,

    #[error("clipboard command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("clipboard contents are not valid UTF-8 text")]
    NotUtf8,
}

pub type Result<T> = std::result::Result<T, Error>;
