//! Where a one-shot command reads its input text from.

use clap::Args;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

use crate::core::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::error::Result;

/// Input selection flags shared by `bake` and `step`.
///
/// With none of them, piped stdin is used; an interactive terminal gives
/// empty input.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Input text
    #[arg(short, long, conflicts_with_all = ["file", "paste"])]
    pub input: Option<String>,

    /// Read input from a text file
    #[arg(short, long, conflicts_with = "paste")]
    pub file: Option<PathBuf>,

    /// Read input from the clipboard
    #[arg(long)]
    pub paste: bool,
}

impl InputArgs {
    /// Resolve the input text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file, clipboard or stdin cannot be read.
    pub fn read(&self, config: &Config) -> Result<String> {
        if let Some(text) = &self.input {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            debug!(path = %path.display(), "reading input file");
            return Ok(std::fs::read_to_string(path)?);
        }
        if self.paste {
            return SystemClipboard::new(&config.clipboard).read();
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(String::new());
        }
        let mut text = String::new();
        stdin.lock().read_to_string(&mut text)?;
        Ok(strip_final_newline(text))
    }
}

/// Drop the single line ending that `echo` and editors append.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
