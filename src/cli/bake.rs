//! Bake command - run every step of a recipe on the input.

use std::path::Path;
use tracing::debug;

use crate::cli::input::InputArgs;
use crate::cli::output;
use crate::core::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::core::{executor, persist};
use crate::error::Result;

/// Bake a recipe file and deliver the output to stdout, a file or the
/// clipboard.
pub fn execute(
    recipe_path: &Path,
    input: &InputArgs,
    out: Option<&Path>,
    copy: bool,
    config: &Config,
) -> Result<()> {
    let mut recipe = persist::load(recipe_path)?;
    let text = input.read(config)?;

    let baked = executor::bake(&mut recipe, &text)?;
    debug!(output_len = baked.output.len(), "baked");

    if let Some(path) = out {
        std::fs::write(path, &baked.output)?;
        output::success(&format!("output saved to {}", output::path(path)));
    } else if copy {
        SystemClipboard::new(&config.clipboard).write(&baked.output)?;
        output::success("output copied to clipboard");
    } else {
        println!("{}", baked.output);
    }
    Ok(())
}
