//! User configuration.
//!
//! Reads an optional `config.toml` from `$LADLE_CONFIG` or the platform
//! config directory (`~/.config/ladle/config.toml` on Linux). A missing file
//! means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Clipboard command overrides.
///
/// Each command is split on whitespace; the first word is the program.
/// When unset, a known clipboard tool is looked up on `PATH`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Command that reads text on stdin and puts it on the clipboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<String>,
    /// Command that prints the clipboard contents on stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paste: Option<String>,
}

/// Terminal output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Colored output. `NO_COLOR` overrides this.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load the config, falling back to defaults when there is no file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, parsed
    /// or validated.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on read, parse or validation failure.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on parse or validation failure.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that configured commands are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for blank clipboard commands.
    pub fn validate(&self) -> Result<()> {
        for (field, command) in [
            ("clipboard.copy", &self.clipboard.copy),
            ("clipboard.paste", &self.clipboard.paste),
        ] {
            if command.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "command must not be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
