//! Constants used throughout ladle.
//!
//! Centralizes parameter names, bounds and environment variables.

/// Parameter name carried by numeric-shift operations.
pub const SHIFT_PARAM: &str = "shift";

/// Parameter name carried by string-key operations.
pub const KEY_PARAM: &str = "key";

/// Smallest accepted Caesar shift.
pub const SHIFT_MIN: i64 = 1;

/// Largest accepted Caesar shift.
pub const SHIFT_MAX: i64 = 25;

/// Letters in the alphabet the Caesar cipher rotates over.
pub const ALPHABET_LEN: u8 = 26;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LADLE_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "LADLE_LOG";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "ladle";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Indentation used when writing recipe files.
pub const RECIPE_INDENT: &[u8] = b"    ";

/// Status line text when nothing has happened yet.
pub const STATUS_READY: &str = "Ready";
