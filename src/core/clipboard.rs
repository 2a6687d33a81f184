//! System clipboard.
//!
//! Talks to the clipboard through the platform's command-line tools rather
//! than a windowing toolkit: `pbcopy`/`pbpaste` on macOS, `wl-copy`/`wl-paste`
//! on Wayland, `xclip` or `xsel` on X11, `clip`/`powershell` on Windows.
//! Commands can be overridden in the `[clipboard]` config section.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::core::config::ClipboardConfig;
use crate::error::{ClipboardError, Result};

const COPY_CANDIDATES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip"],
];

const PASTE_CANDIDATES: &[&[&str]] = &[
    &["pbpaste"],
    &["wl-paste", "--no-newline"],
    &["xclip", "-selection", "clipboard", "-o"],
    &["xsel", "--clipboard", "--output"],
    &["powershell", "-NoProfile", "-Command", "Get-Clipboard"],
];

/// A resolved clipboard command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    fn detect(candidates: &[&[&str]]) -> Option<Self> {
        candidates.iter().find_map(|words| {
            let (program, args) = words.split_first()?;
            which::which(program).ok()?;
            Some(Self {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            })
        })
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn failed(&self, reason: impl ToString) -> ClipboardError {
        ClipboardError::CommandFailed {
            command: self.display(),
            reason: reason.to_string(),
        }
    }
}

/// Clipboard backed by external commands.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    copy: Option<CommandLine>,
    paste: Option<CommandLine>,
}

impl SystemClipboard {
    /// Resolve commands from config, falling back to tools found on `PATH`.
    pub fn new(config: &ClipboardConfig) -> Self {
        let copy = match &config.copy {
            Some(line) => CommandLine::parse(line),
            None => CommandLine::detect(COPY_CANDIDATES),
        };
        let paste = match &config.paste {
            Some(line) => CommandLine::parse(line),
            None => CommandLine::detect(PASTE_CANDIDATES),
        };
        debug!(
            copy = ?copy.as_ref().map(CommandLine::display),
            paste = ?paste.as_ref().map(CommandLine::display),
            "clipboard commands"
        );
        Self { copy, paste }
    }

    /// Read the clipboard as text.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if no command is available, it fails, or the
    /// contents are not UTF-8.
    pub fn read(&self) -> Result<String> {
        let cmd = self.paste.as_ref().ok_or(ClipboardError::Unavailable)?;
        trace!(command = %cmd.display(), "reading clipboard");

        let output = Command::new(&cmd.program)
            .args(&cmd.args)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| cmd.failed(e))?;
        if !output.status.success() {
            return Err(cmd.failed(String::from_utf8_lossy(&output.stderr).trim()).into());
        }
        Ok(String::from_utf8(output.stdout).map_err(|_| ClipboardError::NotUtf8)?)
    }

    /// Replace the clipboard contents.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if no command is available or it fails.
    pub fn write(&self, text: &str) -> Result<()> {
        let cmd = self.copy.as_ref().ok_or(ClipboardError::Unavailable)?;
        trace!(command = %cmd.display(), len = text.len(), "writing clipboard");

        let mut child = Command::new(&cmd.program)
            .args(&cmd.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| cmd.failed(e))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| cmd.failed(e))?;
        }
        let output = child.wait_with_output().map_err(|e| cmd.failed(e))?;
        if !output.status.success() {
            return Err(cmd.failed(String::from_utf8_lossy(&output.stderr).trim()).into());
        }
        Ok(())
    }
}
