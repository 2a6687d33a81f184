//! Outside-world collaborators.
//!
//! The session reaches the clipboard, file pickers, the file system and the
//! user's attention only through [`Host`], so the core stays free of terminal
//! and OS specifics and can be driven by an in-memory host in tests.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// How loudly a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A file type offered by a file picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    pub pattern: &'static str,
}

pub const JSON_FILES: &[FileFilter] = &[FileFilter {
    label: "JSON files",
    pattern: "*.json",
}];

pub const TEXT_FILES: &[FileFilter] = &[
    FileFilter {
        label: "Text files",
        pattern: "*.txt",
    },
    FileFilter {
        label: "All files",
        pattern: "*.*",
    },
];

/// Effects the session needs from its surroundings. Every one may fail.
pub trait Host {
    fn read_clipboard(&mut self) -> Result<String>;

    fn write_clipboard(&mut self, text: &str) -> Result<()>;

    /// Ask for a file to open. `None` means the user cancelled.
    fn open_file_dialog(&mut self, title: &str, filters: &[FileFilter]) -> Result<Option<PathBuf>>;

    /// Ask for a file to write. `None` means the user cancelled.
    fn save_file_dialog(&mut self, title: &str, filters: &[FileFilter]) -> Result<Option<PathBuf>>;

    fn read_text_file(&mut self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_text_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        Ok(std::fs::write(path, contents)?)
    }

    fn notify(&mut self, title: &str, message: &str, severity: Severity);
}
